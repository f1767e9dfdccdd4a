/// Categorizes parse errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise and programmatic. Full
/// human-readable messages live in [`ParseError::message`](crate::ParseError::message).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// list(status done)
    ///             ^^^^ expected `,` or `)`, found `done`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What tokens were expected (e.g. `["`,`", "`)`"]`).
        expected: Vec<String>,
        /// Description of what was found.
        found: String,
    },

    /// The input ended before a complete query was parsed.
    ///
    /// # Example
    /// ```text
    /// list(status=
    ///             ^ expected a value, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// What was expected when the end of input was reached.
        expected: Vec<String>,
    },

    /// The lexer produced an error token (unexpected character or
    /// unterminated string literal). The lexer's message is preserved in the
    /// parent [`ParseError`](crate::ParseError).
    #[error("lexer error")]
    LexerError,

    /// A `(` or `{` was opened but the input ended before it was closed.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        /// The unclosed delimiter (`"("` or `"{"`).
        delimiter: String,
    },

    /// The input contained no queries at all (empty, whitespace, or only
    /// `;` separators).
    #[error("empty query")]
    EmptyQuery,
}
