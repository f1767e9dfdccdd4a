use crate::operation::OperationError;
use serde_json::Value;
use std::cmp::Ordering;

/// Extracts one projected field value from an element.
pub type FieldAccessor<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;

/// String projection of an element used for equality filtering.
pub type FilterAccessor<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Ascending order for a sortable field. Descending reverses it.
pub type SortComparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Lazily loads the host's elements. Called each time a handler asks for
/// [`items`](crate::operation::OperationContext::items).
pub type Loader<T> = Box<dyn Fn() -> Result<Vec<T>, OperationError> + Send + Sync>;
