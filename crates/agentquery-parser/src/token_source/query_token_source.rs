use crate::token::QueryToken;

/// Marker trait for anything that yields [`QueryToken`]s.
///
/// Implementations must emit exactly one `Eof` token as their final item.
/// Lexical failures are emitted as `Error` tokens rather than by stopping
/// iteration.
pub trait QueryTokenSource<'src>: Iterator<Item = QueryToken<'src>> {}

impl<'src, T> QueryTokenSource<'src> for T where T: Iterator<Item = QueryToken<'src>> {}
