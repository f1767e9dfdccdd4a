use crate::ast::Name;
use crate::SourceSpan;
use serde::Serialize;
use std::borrow::Cow;

/// A single call parameter: `key=value` or a bare positional `value`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Param<'src> {
    /// `None` for positional parameters.
    pub key: Option<Name<'src>>,
    pub value: ParamValue<'src>,
    pub span: SourceSpan,
}

impl Param<'_> {
    pub fn is_positional(&self) -> bool {
        self.key.is_none()
    }

    pub fn key_str(&self) -> Option<&str> {
        self.key.as_ref().map(Name::as_str)
    }
}

/// A parameter value. The DSL is untyped at the lexical level, so both forms
/// are just text; the distinction is kept for diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParamValue<'src> {
    /// A bare identifier such as `done`, `42` or `task-1`.
    Identifier(Cow<'src, str>),
    /// A quoted string literal, unescaped.
    String(Cow<'src, str>),
}

impl ParamValue<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Identifier(value) | Self::String(value) => value,
        }
    }
}
