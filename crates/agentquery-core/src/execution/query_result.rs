use crate::operation::OperationError;
use serde_json::Map;
use serde_json::Value;

/// The result of one query slot.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryResult {
    /// One projected element. `values[i]` belongs to `columns[i]`.
    Record {
        columns: Vec<String>,
        values: Vec<Value>,
    },
    /// Projected elements sharing one column list.
    Records {
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    },
    /// A handler-built value (counts, summaries, distinct values).
    Value(Value),
    /// Self-description. Never abbreviated into compact form.
    Metadata(Value),
    Error(OperationError),
}

impl QueryResult {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn error(&self) -> Option<&OperationError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    /// The structured representation of this slot.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Record { columns, values } => Value::Object(zip_record(columns, values)),
            Self::Records { columns, rows } => Value::Array(
                rows.iter()
                    .map(|row| Value::Object(zip_record(columns, row)))
                    .collect(),
            ),
            Self::Value(value) | Self::Metadata(value) => value.clone(),
            Self::Error(err) => err.to_payload(),
        }
    }
}

impl From<OperationError> for QueryResult {
    fn from(err: OperationError) -> Self {
        Self::Error(err)
    }
}

fn zip_record(columns: &[String], values: &[Value]) -> Map<String, Value> {
    columns
        .iter()
        .cloned()
        .zip(values.iter().cloned())
        .collect()
}
