use std::fmt;
use std::str::FromStr;

/// How to render results. Chosen by the caller per invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputMode {
    /// JSON, preserving all nesting.
    Structured,
    /// Header-once tables for lists and `field:value` lines for single
    /// records, with structured fallback.
    Compact,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown output mode {0:?}: expected one of json, structured, compact, llm")]
pub struct UnknownOutputMode(pub String);

impl FromStr for OutputMode {
    type Err = UnknownOutputMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" | "structured" => Ok(Self::Structured),
            "compact" | "llm" => Ok(Self::Compact),
            _ => Err(UnknownOutputMode(s.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Structured => "json",
            Self::Compact => "compact",
        })
    }
}
