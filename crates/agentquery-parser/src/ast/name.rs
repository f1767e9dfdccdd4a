use crate::SourceSpan;
use serde::Serialize;
use std::borrow::Cow;

/// An identifier: an operation name, parameter key, field or preset name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub span: SourceSpan,
}

impl Name<'_> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}
