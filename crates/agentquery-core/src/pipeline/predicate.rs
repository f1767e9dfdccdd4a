use crate::schema::FilterAccessor;

/// A conjunction of case-insensitive equality tests, one per recognized
/// filter key.
///
/// Built from a query's keyed parameters: keys that are not registered
/// filterable fields, and positional parameters, contribute nothing. With no
/// conditions at all the predicate matches every element.
pub struct Predicate<'a, T> {
    conditions: Vec<(&'a FilterAccessor<T>, &'a str)>,
}

impl<'a, T> Predicate<'a, T> {
    pub fn match_all() -> Self {
        Self { conditions: vec![] }
    }

    pub(crate) fn with_condition(mut self, accessor: &'a FilterAccessor<T>, value: &'a str) -> Self {
        self.conditions.push((accessor, value));
        self
    }

    pub fn matches(&self, item: &T) -> bool {
        self.conditions
            .iter()
            .all(|(accessor, expected)| eq_ignore_case(&accessor(item), expected))
    }

    pub fn is_match_all(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }
}

impl<T> std::fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field(
                "values",
                &self.conditions.iter().map(|(_, value)| *value).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Unicode case-insensitive string equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
