use crate::operation::ParameterDef;
use serde::Serialize;

/// Documentation and safety flags for a mutation.
///
/// `destructive` mutations are refused unless the caller confirms.
/// `idempotent` is informational.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MutationMetadata {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    pub destructive: bool,
    pub idempotent: bool,
}

impl MutationMetadata {
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

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }

    pub fn idempotent(mut self) -> Self {
        self.idempotent = true;
        self
    }
}
