pub use agentquery_core::*;

/// The query language front end: lexer, parser, AST and positioned parse
/// errors. Useful for tooling that wants to inspect queries without running
/// them.
pub mod parser {
    pub use agentquery_parser::*;
}
