use crate::token::QueryTokenKind;
use crate::SourceSpan;

/// A query token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryToken<'src> {
    /// The kind of token (including `Error` for lexer errors).
    pub kind: QueryTokenKind<'src>,

    pub span: SourceSpan,
}

impl<'src> QueryToken<'src> {
    pub fn new(kind: QueryTokenKind<'src>, span: SourceSpan) -> Self {
        Self { kind, span }
    }
}
