//! Token types produced by the lexer and consumed by the parser.

mod query_token;
mod query_token_kind;

pub use query_token::QueryToken;
pub use query_token_kind::QueryTokenKind;
