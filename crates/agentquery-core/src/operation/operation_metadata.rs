use crate::operation::ParameterDef;
use serde::Serialize;

/// Documentation for a read operation, surfaced by `schema()`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OperationMetadata {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl OperationMetadata {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn param(mut self, param: ParameterDef) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }
}
