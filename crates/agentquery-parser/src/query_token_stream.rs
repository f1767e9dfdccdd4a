//! Buffered lookahead over a [`QueryTokenSource`].

use std::collections::VecDeque;

use crate::token::QueryToken;
use crate::token::QueryTokenKind;
use crate::token_source::QueryTokenSource;

/// Streaming token reader with arbitrary lookahead.
///
/// Tokens are pulled from the underlying source lazily and kept in a ring
/// buffer until consumed. The DSL grammar never needs more than one token of
/// lookahead, but [`peek_nth`](Self::peek_nth) is there for callers that want
/// more.
pub struct QueryTokenStream<'src, TTokenSource: QueryTokenSource<'src>> {
    token_source: TTokenSource,
    buffer: VecDeque<QueryToken<'src>>,
}

impl<'src, TTokenSource: QueryTokenSource<'src>> QueryTokenStream<'src, TTokenSource> {
    /// Advance to the next token and return it as an owned value.
    ///
    /// Returns `None` once the source is exhausted (after `Eof` was consumed).
    pub fn consume(&mut self) -> Option<QueryToken<'src>> {
        self.ensure_buffer_has(1);
        self.buffer.pop_front()
    }

    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
    }

    /// True when the next token is `Eof` or the source is exhausted.
    pub fn is_at_end(&mut self) -> bool {
        match self.peek() {
            None => true,
            Some(token) => token.kind.is_eof(),
        }
    }

    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
        }
    }

    #[inline]
    pub fn peek(&mut self) -> Option<&QueryToken<'src>> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed) without consuming anything.
    pub fn peek_nth(&mut self, n: usize) -> Option<&QueryToken<'src>> {
        self.ensure_buffer_has(n + 1);
        self.buffer.get(n)
    }

    /// True when the next token satisfies `matches`.
    pub fn peek_is(&mut self, matches: impl FnOnce(&QueryTokenKind<'src>) -> bool) -> bool {
        self.peek().is_some_and(|token| matches(&token.kind))
    }
}
