use crate::ast::Query;
use crate::SourceSpan;
use serde::Serialize;

/// One or more queries separated by `;`, in source order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Batch<'src> {
    pub queries: Vec<Query<'src>>,
    /// From the start of the first query to the end of the last; stray
    /// leading and trailing `;` are outside it.
    pub span: SourceSpan,
}

impl<'src> Batch<'src> {
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// A batch of exactly one query. Single-query batches render without the
    /// surrounding list wrapper.
    pub fn is_single(&self) -> bool {
        self.queries.len() == 1
    }
}
