//! The schema registry: field accessors, presets, filterable and sortable
//! fields, operations and mutations for one host element type.

mod builtins;
mod callbacks;
mod field_selector;
mod introspection;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;

pub use callbacks::FieldAccessor;
pub use callbacks::FilterAccessor;
pub use callbacks::Loader;
pub use callbacks::SortComparator;
pub use field_selector::FieldSelector;
pub use schema::Schema;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
