use crate::ast::FieldSpec;
use crate::ast::Name;
use crate::ast::Param;
use crate::SourceSpan;
use serde::Serialize;

/// `operation(params) { fields }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Query<'src> {
    pub operation: Name<'src>,
    pub params: Vec<Param<'src>>,
    pub field_spec: Option<FieldSpec<'src>>,
    pub span: SourceSpan,
}

impl<'src> Query<'src> {
    /// Keyed parameters as `(key, value)` pairs, in source order.
    pub fn named_params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter_map(|param| param.key_str().map(|key| (key, param.value.as_str())))
    }

    /// Values of the positional parameters, in source order.
    pub fn positional_params(&self) -> impl Iterator<Item = &str> {
        self.params
            .iter()
            .filter(|param| param.is_positional())
            .map(|param| param.value.as_str())
    }

    /// The value of the last parameter named `key`, if any.
    pub fn named_param(&self, key: &str) -> Option<&str> {
        self.named_params()
            .filter(|(k, _)| *k == key)
            .map(|(_, value)| value)
            .last()
    }
}
