//! Various test utils.

use crate::ast;
use crate::token::QueryToken;
use crate::token::QueryTokenKind;
use crate::ParseError;
use crate::SourcePosition;
use crate::SourceSpan;

/// Creates a token with the given kind and a zero-width span at offset 0.
pub fn mock_token(kind: QueryTokenKind<'static>) -> QueryToken<'static> {
    QueryToken::new(kind, SourceSpan::empty_at(SourcePosition::new(0, 0, 0)))
}

pub fn parse_ok(input: &str) -> ast::Batch<'_> {
    match crate::parse(input) {
        Ok(batch) => batch,
        Err(err) => panic!("expected {input:?} to parse, got: {}", err.format_detailed(Some(input))),
    }
}

pub fn parse_err(input: &str) -> ParseError {
    match crate::parse(input) {
        Ok(batch) => panic!("expected {input:?} to fail, got: {batch:#?}"),
        Err(err) => err,
    }
}

/// Collects the kinds a lexer produces for `input`.
pub fn lex_kinds(input: &str) -> Vec<QueryTokenKind<'_>> {
    crate::token_source::StrQueryTokenSource::new(input)
        .map(|token| token.kind)
        .collect()
}
