use crate::SourcePosition;

/// Maps byte offsets within a query string to line/column positions.
///
/// Line starts are computed once, up front, with a single `memchr` scan for
/// `\n`. Each lookup is then a binary search over the line-start table plus a
/// character count within one line, rather than a rescan from the start of
/// the input.
#[derive(Clone, Debug)]
pub struct PositionIndex<'src> {
    source: &'src str,
    /// Byte offsets at which each line begins. Always starts with `0`.
    line_starts: Vec<usize>,
}

impl<'src> PositionIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            memchr::memchr_iter(b'\n', source.as_bytes()).map(|nl| nl + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    /// Number of lines in the source. An empty source has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the [`SourcePosition`] for `byte_offset`.
    ///
    /// Offsets past the end of the source are clamped to the end.
    pub fn position_at(&self, byte_offset: usize) -> SourcePosition {
        let offset = byte_offset.min(self.source.len());
        // `line_starts[0] == 0`, so the partition point is always >= 1.
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = match self.source.get(line_start..offset) {
            Some(prefix) => prefix.chars().count(),
            None => offset - line_start,
        };
        SourcePosition::new(line, column, offset)
    }

    /// Returns the text of the 0-based `line`, without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&'src str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());
        self.source
            .get(start..end)
            .map(|text| text.strip_suffix('\r').unwrap_or(text))
    }

    pub fn source(&self) -> &'src str {
        self.source
    }
}
