//! A [`QueryTokenSource`](crate::token_source::QueryTokenSource) that lexes
//! from a `&str` input.
//!
//! ```rust
//! use agentquery_parser::token::QueryTokenKind;
//! use agentquery_parser::token_source::StrQueryTokenSource;
//!
//! let kinds: Vec<_> = StrQueryTokenSource::new("count()")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     QueryTokenKind::Identifier("count"),
//!     QueryTokenKind::ParenOpen,
//!     QueryTokenKind::ParenClose,
//!     QueryTokenKind::Eof,
//! ]);
//! ```

use crate::token::QueryToken;
use crate::token::QueryTokenKind;
use crate::PositionIndex;
use crate::SourceSpan;
use std::borrow::Cow;

/// Lexer over a borrowed query string.
pub struct StrQueryTokenSource<'src> {
    source: &'src str,
    positions: PositionIndex<'src>,
    curr_byte_offset: usize,
    finished: bool,
}

impl<'src> StrQueryTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            positions: PositionIndex::new(source),
            curr_byte_offset: 0,
            finished: false,
        }
    }

    fn span(&self, start: usize, end: usize) -> SourceSpan {
        SourceSpan::new(
            self.positions.position_at(start),
            self.positions.position_at(end),
        )
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.source.as_bytes();
        while let Some(b) = bytes.get(self.curr_byte_offset) {
            match b {
                b' ' | b'\t' | b'\r' | b'\n' => self.curr_byte_offset += 1,
                _ => break,
            }
        }
    }

    fn lex_punctuator(&mut self, kind: QueryTokenKind<'src>) -> QueryToken<'src> {
        let start = self.curr_byte_offset;
        self.curr_byte_offset += 1;
        QueryToken::new(kind, self.span(start, self.curr_byte_offset))
    }

    fn lex_identifier(&mut self) -> QueryToken<'src> {
        let source = self.source;
        let start = self.curr_byte_offset;
        let bytes = source.as_bytes();
        self.curr_byte_offset += 1;
        while bytes
            .get(self.curr_byte_offset)
            .is_some_and(|&b| is_identifier_continue(b))
        {
            self.curr_byte_offset += 1;
        }
        QueryToken::new(
            QueryTokenKind::Identifier(&source[start..self.curr_byte_offset]),
            self.span(start, self.curr_byte_offset),
        )
    }

    fn lex_string(&mut self) -> QueryToken<'src> {
        let source = self.source;
        let start = self.curr_byte_offset;
        let body_start = start + 1;
        let bytes = source.as_bytes();
        let mut cursor = body_start;
        // Only allocated once an escape sequence is seen.
        let mut cooked: Option<String> = None;
        let mut plain_run_start = body_start;

        while let Some(&b) = bytes.get(cursor) {
            match b {
                b'"' => {
                    let value = match cooked {
                        Some(mut owned) => {
                            owned.push_str(&source[plain_run_start..cursor]);
                            Cow::Owned(owned)
                        },
                        None => Cow::Borrowed(&source[body_start..cursor]),
                    };
                    self.curr_byte_offset = cursor + 1;
                    return QueryToken::new(
                        QueryTokenKind::StringLiteral(value),
                        self.span(start, self.curr_byte_offset),
                    );
                },
                b'\\' if cursor + 1 < bytes.len() => {
                    let owned = cooked.get_or_insert_with(String::new);
                    owned.push_str(&source[plain_run_start..cursor]);
                    match bytes[cursor + 1] {
                        b'"' => owned.push('"'),
                        b'\\' => owned.push('\\'),
                        b'n' => owned.push('\n'),
                        b't' => owned.push('\t'),
                        _ => {
                            // Unknown escapes are kept verbatim, backslash
                            // included. The escaped char may be multi-byte.
                            let escaped = source[cursor + 1..]
                                .chars()
                                .next()
                                .map(char::len_utf8)
                                .unwrap_or(1);
                            owned.push_str(&source[cursor..cursor + 1 + escaped]);
                            cursor += 1 + escaped;
                            plain_run_start = cursor;
                            continue;
                        },
                    }
                    cursor += 2;
                    plain_run_start = cursor;
                },
                _ => cursor += 1,
            }
        }

        self.curr_byte_offset = source.len();
        QueryToken::new(
            QueryTokenKind::Error {
                message: "unterminated string literal".to_string(),
                got: source[start..].to_string(),
            },
            self.span(start, self.curr_byte_offset),
        )
    }

    fn lex_unexpected_char(&mut self, ch: char) -> QueryToken<'src> {
        let start = self.curr_byte_offset;
        self.curr_byte_offset += ch.len_utf8();
        QueryToken::new(
            QueryTokenKind::Error {
                message: format!("unexpected character {:?}", ch.to_string()),
                got: ch.to_string(),
            },
            self.span(start, self.curr_byte_offset),
        )
    }
}

impl<'src> Iterator for StrQueryTokenSource<'src> {
    type Item = QueryToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        self.skip_whitespace();

        let Some(ch) = self.source[self.curr_byte_offset..].chars().next() else {
            self.finished = true;
            let end = self.source.len();
            return Some(QueryToken::new(QueryTokenKind::Eof, self.span(end, end)));
        };

        let token = match ch {
            '(' => self.lex_punctuator(QueryTokenKind::ParenOpen),
            ')' => self.lex_punctuator(QueryTokenKind::ParenClose),
            '{' => self.lex_punctuator(QueryTokenKind::CurlyBraceOpen),
            '}' => self.lex_punctuator(QueryTokenKind::CurlyBraceClose),
            '=' => self.lex_punctuator(QueryTokenKind::Equals),
            ',' => self.lex_punctuator(QueryTokenKind::Comma),
            ';' => self.lex_punctuator(QueryTokenKind::Semicolon),
            '"' => self.lex_string(),
            c if c.is_ascii() && is_identifier_start(c as u8) => self.lex_identifier(),
            c => self.lex_unexpected_char(c),
        };
        Some(token)
    }
}

fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_identifier_continue(b: u8) -> bool {
    is_identifier_start(b) || b == b'-'
}
