use crate::SourcePosition;
use serde::Serialize;

/// Represents a span of query text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl SourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self {
            start_inclusive: pos.clone(),
            end_exclusive: pos,
        }
    }

    /// Returns a span covering `self` through the end of `other`.
    pub fn to(&self, other: &SourceSpan) -> SourceSpan {
        SourceSpan {
            start_inclusive: self.start_inclusive.clone(),
            end_exclusive: other.end_exclusive.clone(),
        }
    }

    /// Length of this span in bytes.
    pub fn byte_len(&self) -> usize {
        self.end_exclusive
            .byte_offset()
            .saturating_sub(self.start_inclusive.byte_offset())
    }
}
