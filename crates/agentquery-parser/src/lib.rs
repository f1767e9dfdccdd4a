//! Lexer and recursive-descent parser for the agentquery DSL.
//!
//! The DSL is a compact call syntax for querying a host application's
//! in-memory data:
//!
//! ```text
//! list(status=done, sort_name=desc, take=5) { id name status }; count()
//! ```
//!
//! This crate only builds syntax. It knows nothing about which operations,
//! fields or presets exist; that validation happens against a schema in
//! `agentquery-core`.
//!
//! # Example
//!
//! ```
//! let batch = agentquery_parser::parse("get(task-1) { overview }").unwrap();
//! assert_eq!(batch.queries.len(), 1);
//! assert_eq!(batch.queries[0].operation.value, "get");
//! ```

pub mod ast;
mod parse_error;
mod parse_error_kind;
mod position_index;
mod query_parser;
mod query_token_stream;
mod source_position;
mod source_span;
pub mod token;
pub mod token_source;

pub use parse_error::ParseError;
pub use parse_error_kind::ParseErrorKind;
pub use position_index::PositionIndex;
pub use query_parser::QueryParser;
pub use query_token_stream::QueryTokenStream;
pub use source_position::SourcePosition;
pub use source_span::SourceSpan;

/// Parses `input` into a [`Batch`](ast::Batch) of queries.
///
/// Parsing is all-or-nothing: the first syntax error aborts the whole batch
/// and no partial AST is returned.
pub fn parse(input: &str) -> Result<ast::Batch<'_>, ParseError> {
    QueryParser::new(input).parse_batch()
}

#[cfg(test)]
mod tests;
