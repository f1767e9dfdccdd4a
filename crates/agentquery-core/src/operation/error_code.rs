use std::fmt;

/// Machine-readable category carried by every [`OperationError`](crate::operation::OperationError).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorCode {
    /// Malformed query text.
    Parse,
    /// Unknown operation or mutation, or a handler-reported missing element.
    NotFound,
    /// Unknown field or preset, bad pagination or sort arguments.
    Validation,
    /// Refused destructive mutation.
    Forbidden,
    /// A required mutation parameter was not supplied.
    Required,
    /// A mutation parameter was outside its declared set of values.
    InvalidValue,
    Conflict,
    PreconditionFailed,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parse => "PARSE_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION_ERROR",
            Self::Forbidden => "FORBIDDEN",
            Self::Required => "REQUIRED",
            Self::InvalidValue => "INVALID_VALUE",
            Self::Conflict => "CONFLICT",
            Self::PreconditionFailed => "PRECONDITION_FAILED",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
