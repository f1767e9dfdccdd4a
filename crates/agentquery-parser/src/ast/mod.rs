//! Syntax tree for a parsed query batch.
//!
//! The tree is purely syntactic. Operation names, field names and preset
//! names are plain [`Name`]s here; whether they exist is decided later
//! against a schema. Every node carries the [`SourceSpan`](crate::SourceSpan)
//! it was parsed from.

mod batch;
mod field_spec;
mod name;
mod param;
mod query;

pub use batch::Batch;
pub use field_spec::FieldSpec;
pub use name::Name;
pub use param::Param;
pub use param::ParamValue;
pub use query::Query;
