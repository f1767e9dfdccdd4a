use serde_json::Value;

/// What a handler returns.
///
/// Domain elements (`Item`, `Items`) are projected through the query's field
/// selector by the engine. `Value` is passed through as-is. `Metadata` is
/// also passed through and always renders in structured form, whatever
/// output mode the caller asked for.
#[derive(Clone, Debug, PartialEq)]
pub enum Output<T> {
    Item(T),
    Items(Vec<T>),
    Value(Value),
    Metadata(Value),
}

impl<T> Output<T> {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }
}
