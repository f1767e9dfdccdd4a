//! Token source trait and the `&str` lexer.

mod query_token_source;
mod str_query_token_source;

pub use query_token_source::QueryTokenSource;
pub use str_query_token_source::StrQueryTokenSource;
