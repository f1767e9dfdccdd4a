use crate::ast::Name;
use crate::SourceSpan;
use serde::Serialize;

/// The `{ ... }` projection following a call.
///
/// Holds the names exactly as written (duplicates included). Each name is
/// resolved later as either a field or a preset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldSpec<'src> {
    pub names: Vec<Name<'src>>,
    pub span: SourceSpan,
}

impl FieldSpec<'_> {
    pub fn iter_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_str())
    }
}
