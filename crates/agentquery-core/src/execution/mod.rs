//! Batch execution: per-query dispatch with error isolation.

mod executor;
mod outcome;
mod query_result;

pub use outcome::Outcome;
pub use query_result::QueryResult;

#[cfg(test)]
mod tests;
