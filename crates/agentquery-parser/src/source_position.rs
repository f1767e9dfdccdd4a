use serde::Serialize;

/// A position within query text.
///
/// This is a pure data struct. Lexers compute positions (usually via a
/// [`PositionIndex`](crate::PositionIndex)) and attach them to tokens.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the input
/// - `column`: UTF-8 character count within the current line
/// - `byte_offset`: byte offset within the whole input
///
/// Human-facing output (error messages, error payloads) adds 1 to `line` and
/// `column`; see [`SourcePosition::display_line`] and
/// [`SourcePosition::display_column`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character column within the current line.
    ///
    /// Counts characters, not bytes: both `a` and `é` advance this by 1.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from the start of the input.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// 1-based line number, for humans.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }

    /// 1-based column number, for humans.
    pub fn display_column(&self) -> usize {
        self.column + 1
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.display_line(), self.display_column())
    }
}
