use crate::ParseErrorKind;
use crate::PositionIndex;
use crate::SourcePosition;
use crate::SourceSpan;

/// A syntax error with location information.
///
/// Parse errors are terminal: the first one aborts the whole batch and no
/// partial AST is produced.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ParseError {
    /// Human-readable primary error message, e.g. "expected ')'".
    message: String,

    /// Where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For "expected X" errors at end of input: a zero-width span at the end
    /// - For lexer errors: the span of the offending character or literal
    span: SourceSpan,

    kind: ParseErrorKind,

    /// Source text of the offending token, or `"end of input"`.
    got: String,

    /// What the parser was expecting, if it was expecting something specific.
    expected: Option<String>,
}

impl ParseError {
    pub fn new(
        message: impl Into<String>,
        span: SourceSpan,
        kind: ParseErrorKind,
        got: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            got: got.into(),
            expected: None,
        }
    }

    /// Attaches a description of what was expected.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Creates a parse error from a lexer error token.
    ///
    /// When the parser encounters a
    /// [`QueryTokenKind::Error`](crate::token::QueryTokenKind::Error) token,
    /// this preserves the lexer's message and offending text.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: SourceSpan,
        got: impl Into<String>,
    ) -> Self {
        Self::new(message, span, ParseErrorKind::LexerError, got)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Start position of the error.
    pub fn position(&self) -> &SourcePosition {
        &self.span.start_inclusive
    }

    pub fn span(&self) -> &SourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The offending source text (or `"end of input"`).
    pub fn got(&self) -> &str {
        &self.got
    }

    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// 1:13: error: expected ')' (got "end of input")
    /// ```
    pub fn format_oneline(&self) -> String {
        let pos = self.position();
        let mut output = format!("{pos}: error: {}", self.message);
        if !self.got.is_empty() {
            output.push_str(&format!(" (got {:?})", self.got));
        }
        output
    }

    /// Formats this error as a diagnostic with a caret snippet.
    ///
    /// ```text
    /// error: expected ')'
    ///   --> <query>:1:13
    ///    |
    ///  1 | list(status=
    ///    |             ^
    /// ```
    ///
    /// If `source` is `None` the snippet is omitted but line and column are
    /// still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let pos = self.position();
        output.push_str(&format!("  --> <query>:{pos}\n"));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        if let Some(expected) = &self.expected {
            output.push_str(&format!("   = expected: {expected}\n"));
        }

        output
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let index = PositionIndex::new(source);
        let line_num = self.span.start_inclusive.line();
        let line_content = index.line_text(line_num)?;
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));

        let col_start = self.span.start_inclusive.column();
        // Spans crossing a line break are underlined for one column only.
        let col_end = if self.span.end_exclusive.line() == line_num {
            self.span.end_exclusive.column()
        } else {
            col_start
        };
        let underline_len = col_end.saturating_sub(col_start).max(1);

        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }
}
