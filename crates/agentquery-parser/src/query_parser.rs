//! Recursive-descent parser for the agentquery DSL.
//!
//! ```text
//! batch   = query (";" query)*
//! query   = operation "(" [params] ")" ["{" fields "}"]
//! params  = param ("," param)*
//! param   = identifier "=" value | value
//! fields  = identifier+
//! value   = identifier | string-literal
//! ```
//!
//! Leading, trailing and repeated `;` are skipped. Commas between field names
//! are allowed and ignored.

use crate::ast;
use crate::token::QueryToken;
use crate::token::QueryTokenKind;
use crate::token_source::QueryTokenSource;
use crate::token_source::StrQueryTokenSource;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::QueryTokenStream;
use crate::SourcePosition;
use crate::SourceSpan;
use smallvec::SmallVec;

/// A `(` or `{` that has been opened but not yet closed.
#[derive(Clone, Debug)]
struct OpenDelimiter {
    delimiter: char,
    span: SourceSpan,
}

/// Parses a token stream into an [`ast::Batch`].
///
/// The parser is single-use: [`parse_batch`](Self::parse_batch) consumes it.
/// Parsing stops at the first error.
pub struct QueryParser<'src, TTokenSource: QueryTokenSource<'src>> {
    token_stream: QueryTokenStream<'src, TTokenSource>,
    delimiter_stack: SmallVec<[OpenDelimiter; 2]>,
    /// End of the most recently consumed token.
    last_end_position: SourcePosition,
}

impl<'src> QueryParser<'src, StrQueryTokenSource<'src>> {
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(StrQueryTokenSource::new(source))
    }
}

impl<'src, TTokenSource: QueryTokenSource<'src>> QueryParser<'src, TTokenSource> {
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: QueryTokenStream::new(token_source),
            delimiter_stack: SmallVec::new(),
            last_end_position: SourcePosition::new(0, 0, 0),
        }
    }

    pub fn parse_batch(mut self) -> Result<ast::Batch<'src>, ParseError> {
        self.skip_semicolons();
        if self.token_stream.is_at_end() {
            let token = self.consume();
            return Err(ParseError::new(
                "empty query",
                token.span,
                ParseErrorKind::EmptyQuery,
                "end of input",
            ));
        }

        let first = self.parse_query()?;
        let mut span = first.span.clone();
        let mut queries = vec![first];
        loop {
            if self.token_stream.peek_is(|kind| matches!(kind, QueryTokenKind::Semicolon)) {
                self.skip_semicolons();
                if self.token_stream.is_at_end() {
                    break;
                }
                let query = self.parse_query()?;
                span = span.to(&query.span);
                queries.push(query);
                continue;
            }
            if self.token_stream.is_at_end() {
                break;
            }

            let token = self.consume();
            return Err(self.unexpected(
                token,
                "expected ';' or end of input",
                "';' or end of input",
            ));
        }

        Ok(ast::Batch { queries, span })
    }

    // =========================================================================
    // Productions
    // =========================================================================

    fn parse_query(&mut self) -> Result<ast::Query<'src>, ParseError> {
        let operation = self.expect_name("expected operation name")?;
        self.expect_open(
            |kind| matches!(kind, QueryTokenKind::ParenOpen),
            '(',
            "expected '('",
        )?;

        let mut params = Vec::new();
        if !self.token_stream.peek_is(|kind| matches!(kind, QueryTokenKind::ParenClose)) {
            loop {
                params.push(self.parse_param()?);
                if self.token_stream.peek_is(|kind| matches!(kind, QueryTokenKind::Comma)) {
                    self.consume();
                    continue;
                }
                break;
            }
        }
        self.expect_close(
            |kind| matches!(kind, QueryTokenKind::ParenClose),
            "expected ',' or ')'",
            "',' or ')'",
        )?;

        let field_spec =
            if self.token_stream.peek_is(|kind| matches!(kind, QueryTokenKind::CurlyBraceOpen)) {
                Some(self.parse_field_spec()?)
            } else {
                None
            };

        let span = SourceSpan::new(
            operation.span.start_inclusive.clone(),
            self.last_end_position.clone(),
        );
        Ok(ast::Query {
            operation,
            params,
            field_spec,
            span,
        })
    }

    fn parse_param(&mut self) -> Result<ast::Param<'src>, ParseError> {
        let token = self.consume();
        let start = token.span.start_inclusive.clone();
        let first = match token.kind {
            QueryTokenKind::Identifier(value) => ast::ParamValue::Identifier(value.into()),
            QueryTokenKind::StringLiteral(value) => ast::ParamValue::String(value),
            _ => {
                return Err(self.unexpected(
                    token,
                    "expected argument",
                    "identifier or string",
                ));
            },
        };

        let is_key = matches!(first, ast::ParamValue::Identifier(_))
            && self.token_stream.peek_is(|kind| matches!(kind, QueryTokenKind::Equals));
        if !is_key {
            return Ok(ast::Param {
                key: None,
                value: first,
                span: SourceSpan::new(start, self.last_end_position.clone()),
            });
        }

        let key_span = token.span;
        self.consume();
        let value_token = self.consume();
        let value = match value_token.kind {
            QueryTokenKind::Identifier(value) => ast::ParamValue::Identifier(value.into()),
            QueryTokenKind::StringLiteral(value) => ast::ParamValue::String(value),
            _ => {
                return Err(self.unexpected(
                    value_token,
                    "expected value after '='",
                    "identifier or string",
                ));
            },
        };
        let key_value = match first {
            ast::ParamValue::Identifier(key) | ast::ParamValue::String(key) => key,
        };

        Ok(ast::Param {
            key: Some(ast::Name {
                value: key_value,
                span: key_span,
            }),
            value,
            span: SourceSpan::new(start, self.last_end_position.clone()),
        })
    }

    fn parse_field_spec(&mut self) -> Result<ast::FieldSpec<'src>, ParseError> {
        let open_span = self.expect_open(
            |kind| matches!(kind, QueryTokenKind::CurlyBraceOpen),
            '{',
            "expected '{'",
        )?;

        let mut names = Vec::new();
        loop {
            if self.token_stream.peek_is(|kind| matches!(kind, QueryTokenKind::Comma)) {
                self.consume();
                continue;
            }
            if self.token_stream.peek_is(|kind| matches!(kind, QueryTokenKind::Identifier(_))) {
                names.push(self.expect_name("expected field name")?);
                continue;
            }
            break;
        }

        if names.is_empty()
            && self.token_stream.peek_is(|kind| matches!(kind, QueryTokenKind::CurlyBraceClose))
        {
            let token = self.consume();
            return Err(self.unexpected(token, "expected field name", "identifier"));
        }

        self.expect_close(
            |kind| matches!(kind, QueryTokenKind::CurlyBraceClose),
            "expected field name or '}'",
            "identifier or '}'",
        )?;

        Ok(ast::FieldSpec {
            names,
            span: SourceSpan::new(open_span.start_inclusive, self.last_end_position.clone()),
        })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Consumes the next token. Past the end of the source this keeps
    /// returning a zero-width `Eof` at the last known position.
    fn consume(&mut self) -> QueryToken<'src> {
        match self.token_stream.consume() {
            Some(token) => {
                self.last_end_position = token.span.end_exclusive.clone();
                token
            },
            None => QueryToken::new(
                QueryTokenKind::Eof,
                SourceSpan::empty_at(self.last_end_position.clone()),
            ),
        }
    }

    fn skip_semicolons(&mut self) {
        while self.token_stream.peek_is(|kind| matches!(kind, QueryTokenKind::Semicolon)) {
            self.consume();
        }
    }

    fn expect_name(&mut self, message: &str) -> Result<ast::Name<'src>, ParseError> {
        let token = self.consume();
        match token.kind {
            QueryTokenKind::Identifier(value) => Ok(ast::Name {
                value: value.into(),
                span: token.span,
            }),
            _ => Err(self.unexpected(token, message, "identifier")),
        }
    }

    fn expect_open(
        &mut self,
        is_open: impl FnOnce(&QueryTokenKind<'src>) -> bool,
        delimiter: char,
        message: &str,
    ) -> Result<SourceSpan, ParseError> {
        let token = self.consume();
        if !is_open(&token.kind) {
            let expected = format!("'{delimiter}'");
            return Err(self.unexpected(token, message, &expected));
        }
        self.delimiter_stack.push(OpenDelimiter {
            delimiter,
            span: token.span.clone(),
        });
        Ok(token.span)
    }

    fn expect_close(
        &mut self,
        is_close: impl FnOnce(&QueryTokenKind<'src>) -> bool,
        message: &str,
        expected: &str,
    ) -> Result<SourceSpan, ParseError> {
        let token = self.consume();
        if !is_close(&token.kind) {
            return Err(self.unexpected(token, message, expected));
        }
        self.delimiter_stack.pop();
        Ok(token.span)
    }

    /// Builds the error for a token that does not fit the grammar here.
    ///
    /// Lexer error tokens take priority over the grammar message. Running out
    /// of input inside `(` or `{` is reported as an unclosed delimiter.
    fn unexpected(&self, token: QueryToken<'src>, message: &str, expected: &str) -> ParseError {
        match token.kind {
            QueryTokenKind::Error { message, got } => {
                ParseError::from_lexer_error(message, token.span, got)
            },
            QueryTokenKind::Eof => {
                let kind = match self.delimiter_stack.last() {
                    Some(open) => ParseErrorKind::UnclosedDelimiter {
                        delimiter: open.delimiter.to_string(),
                    },
                    None => ParseErrorKind::UnexpectedEof {
                        expected: vec![expected.to_string()],
                    },
                };
                let message = match self.delimiter_stack.last() {
                    Some(open) => format!(
                        "{message} (unclosed '{}' opened at {})",
                        open.delimiter, open.span.start_inclusive,
                    ),
                    None => message.to_string(),
                };
                ParseError::new(message, token.span, kind, "end of input")
                    .with_expected(expected)
            },
            other => ParseError::new(
                message,
                token.span,
                ParseErrorKind::UnexpectedToken {
                    expected: vec![expected.to_string()],
                    found: other.describe(),
                },
                other.source_text(),
            )
            .with_expected(expected),
        }
    }
}
