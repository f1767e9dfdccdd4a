use crate::execution::QueryResult;
use crate::operation::Output;
use crate::schema::FieldAccessor;
use serde_json::Map;
use serde_json::Value;

/// A resolved, ordered, duplicate-free projection.
///
/// Column order is request order (presets expanded in place), never
/// registration order. Built by [`Schema::selector`](crate::schema::Schema::selector).
pub struct FieldSelector<'a, T> {
    columns: Vec<(&'a str, &'a FieldAccessor<T>)>,
}

impl<'a, T> FieldSelector<'a, T> {
    pub(crate) fn new(columns: Vec<(&'a str, &'a FieldAccessor<T>)>) -> Self {
        Self { columns }
    }

    pub fn fields(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.columns.iter().map(|(name, _)| *name)
    }

    pub fn includes(&self, field: &str) -> bool {
        self.columns.iter().any(|(name, _)| *name == field)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Projected values of `item`, in column order.
    pub fn project_row(&self, item: &T) -> Vec<Value> {
        self.columns.iter().map(|(_, accessor)| accessor(item)).collect()
    }

    /// Projects `item` into an ordered `field -> value` map.
    pub fn apply(&self, item: &T) -> Map<String, Value> {
        self.columns
            .iter()
            .map(|(name, accessor)| ((*name).to_string(), accessor(item)))
            .collect()
    }

    /// Projects a handler's output. Domain elements become records; values
    /// pass through untouched.
    pub fn project(&self, output: Output<T>) -> QueryResult {
        match output {
            Output::Item(item) => QueryResult::Record {
                columns: self.column_names(),
                values: self.project_row(&item),
            },
            Output::Items(items) => QueryResult::Records {
                columns: self.column_names(),
                rows: items.iter().map(|item| self.project_row(item)).collect(),
            },
            Output::Value(value) => QueryResult::Value(value),
            Output::Metadata(value) => QueryResult::Metadata(value),
        }
    }

    fn column_names(&self) -> Vec<String> {
        self.fields().map(str::to_string).collect()
    }
}

impl<T> std::fmt::Debug for FieldSelector<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.fields()).finish()
    }
}
