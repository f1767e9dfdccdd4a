use crate::execution::QueryResult;
use serde_json::Value;

/// The result of executing a parsed batch.
///
/// A batch of one query yields `Single`, rendered as a bare result. Larger
/// batches yield `Batch` with exactly one slot per query, in source order.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Single(QueryResult),
    Batch(Vec<QueryResult>),
}

impl Outcome {
    pub(crate) fn from_results(mut results: Vec<QueryResult>) -> Self {
        if results.len() == 1
            && let Some(only) = results.pop()
        {
            return Self::Single(only);
        }
        Self::Batch(results)
    }

    pub fn results(&self) -> &[QueryResult] {
        match self {
            Self::Single(result) => std::slice::from_ref(result),
            Self::Batch(results) => results,
        }
    }

    pub fn into_results(self) -> Vec<QueryResult> {
        match self {
            Self::Single(result) => vec![result],
            Self::Batch(results) => results,
        }
    }

    pub fn len(&self) -> usize {
        self.results().len()
    }

    pub fn is_empty(&self) -> bool {
        self.results().is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.results().iter().any(QueryResult::is_error)
    }

    /// Structured representation: the bare slot for `Single`, an ordered
    /// array for `Batch`.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Single(result) => result.to_value(),
            Self::Batch(results) => Value::Array(results.iter().map(QueryResult::to_value).collect()),
        }
    }
}
