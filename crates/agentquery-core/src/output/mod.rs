//! Rendering of execution outcomes.
//!
//! The caller picks the [`OutputMode`] on every call; schemas carry no
//! default. Compact mode falls back to structured output for anything it
//! cannot flatten losslessly.

mod compact;
mod output_mode;
mod structured;

pub use output_mode::OutputMode;
pub use output_mode::UnknownOutputMode;
pub use structured::parse_error_payload;

use crate::execution::Outcome;
use agentquery_parser::ParseError;

/// Renders `outcome` in `mode`.
///
/// Compact output is line-oriented and ends with a newline. Structured
/// output is a single line of JSON with no trailing newline.
pub fn render(outcome: &Outcome, mode: OutputMode) -> String {
    match mode {
        OutputMode::Structured => structured::render(outcome),
        OutputMode::Compact => {
            compact::render(outcome).unwrap_or_else(|| structured::render(outcome))
        },
    }
}

/// Indented structured output, for humans.
pub fn render_pretty(outcome: &Outcome) -> String {
    format!("{:#}", outcome.to_value())
}

/// A parse error rendered through the same contract as a query result.
/// Error payloads are always structured.
pub fn render_parse_error(err: &ParseError) -> String {
    parse_error_payload(err).to_string()
}

#[cfg(test)]
mod tests;
