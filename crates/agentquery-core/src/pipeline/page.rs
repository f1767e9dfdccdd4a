use crate::operation::OperationError;

/// A `skip`/`take` window. Absent values mean "no windowing" on that side.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Page {
    pub skip: Option<usize>,
    pub take: Option<usize>,
}

impl Page {
    pub fn new(skip: Option<usize>, take: Option<usize>) -> Self {
        Self { skip, take }
    }

    /// Parses raw `skip` and `take` parameter values.
    pub fn parse(skip: Option<&str>, take: Option<&str>) -> Result<Self, OperationError> {
        Ok(Self {
            skip: skip.map(|value| parse_count("skip", value)).transpose()?,
            take: take.map(|value| parse_count("take", value)).transpose()?,
        })
    }

    pub fn is_unbounded(&self) -> bool {
        self.skip.is_none() && self.take.is_none()
    }

    /// Drops `skip` elements from the front, then keeps at most `take`.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        if self.is_unbounded() {
            return items;
        }
        let skip = self.skip.unwrap_or(0);
        let take = self.take.unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(take).collect()
    }
}

fn parse_count(param: &str, value: &str) -> Result<usize, OperationError> {
    value.parse::<usize>().map_err(|_| {
        OperationError::validation(format!(
            "{param} must be a non-negative integer, got {value:?}",
        ))
        .with_detail("param", param)
        .with_detail("value", value)
    })
}
