//! The agentquery engine: a schema registry generic over the host's element
//! type, a filter/sort/paginate pipeline, batch execution with per-query
//! error isolation, and structured or compact output rendering.
//!
//! # Example
//!
//! ```
//! use agentquery_core::output::OutputMode;
//! use agentquery_core::operation::Output;
//! use agentquery_core::schema::SchemaBuilder;
//!
//! #[derive(Clone)]
//! struct Book {
//!     title: String,
//!     genre: String,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = SchemaBuilder::<Book>::new();
//! builder
//!     .field("title", |b: &Book| b.title.clone())?
//!     .field("genre", |b: &Book| b.genre.clone())?
//!     .filterable_field("genre", |b: &Book| b.genre.clone())?
//!     .operation("list", |ctx| {
//!         let items = ctx.items()?;
//!         Ok(Output::Items(ctx.apply_pipeline(items)?))
//!     })?;
//! builder.loader(|| {
//!     Ok(vec![
//!         Book { title: "Dune".into(), genre: "scifi".into() },
//!         Book { title: "Emma".into(), genre: "romance".into() },
//!     ])
//! });
//! let schema = builder.build()?;
//!
//! let out = schema.run("list(genre=SciFi) { title }", OutputMode::Compact);
//! assert_eq!(out, "title\nDune\n");
//! # Ok(())
//! # }
//! ```

pub mod execution;
pub mod operation;
pub mod output;
pub mod pipeline;
pub mod schema;

pub use agentquery_parser::ParseError;
pub use serde_json::Value;

#[cfg(test)]
mod test_support;
