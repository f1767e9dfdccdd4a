use std::borrow::Cow;

/// The kind of a query token.
///
/// Identifiers borrow straight from the source. String literals borrow too
/// unless they contain an escape sequence that had to be cooked.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryTokenKind<'src> {
    /// `[A-Za-z0-9_][A-Za-z0-9_-]*`. Numerals lex as identifiers.
    Identifier(&'src str),

    /// A double-quoted string literal, already unescaped.
    StringLiteral(Cow<'src, str>),

    ParenOpen,
    ParenClose,
    CurlyBraceOpen,
    CurlyBraceClose,
    Equals,
    Comma,
    Semicolon,

    /// End of input. Always the last token a lexer emits.
    Eof,

    /// A lexical error. The parser turns the first one it sees into a
    /// [`ParseError`](crate::ParseError).
    Error {
        message: String,
        /// The offending source text.
        got: String,
    },
}

impl QueryTokenKind<'_> {
    /// Short human description used in "found ..." error text.
    pub fn describe(&self) -> String {
        match self {
            Self::Identifier(name) => format!("identifier `{name}`"),
            Self::StringLiteral(value) => format!("string {value:?}"),
            Self::ParenOpen => "`(`".to_string(),
            Self::ParenClose => "`)`".to_string(),
            Self::CurlyBraceOpen => "`{`".to_string(),
            Self::CurlyBraceClose => "`}`".to_string(),
            Self::Equals => "`=`".to_string(),
            Self::Comma => "`,`".to_string(),
            Self::Semicolon => "`;`".to_string(),
            Self::Eof => "end of input".to_string(),
            Self::Error { message, .. } => message.clone(),
        }
    }

    /// The raw text this token stands for, as reported in
    /// [`ParseError::got`](crate::ParseError::got).
    pub fn source_text(&self) -> String {
        match self {
            Self::Identifier(name) => (*name).to_string(),
            Self::StringLiteral(value) => value.to_string(),
            Self::ParenOpen => "(".to_string(),
            Self::ParenClose => ")".to_string(),
            Self::CurlyBraceOpen => "{".to_string(),
            Self::CurlyBraceClose => "}".to_string(),
            Self::Equals => "=".to_string(),
            Self::Comma => ",".to_string(),
            Self::Semicolon => ";".to_string(),
            Self::Eof => "end of input".to_string(),
            Self::Error { got, .. } => got.clone(),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
