use crate::operation::OperationError;
use crate::pipeline::Page;
use crate::pipeline::Predicate;
use crate::pipeline::SortSpec;
use crate::schema::Schema;
use crate::schema::SortComparator;
use indexmap::IndexSet;
use std::cmp::Ordering;

/// Keeps the elements `predicate` accepts, preserving order.
pub fn filter_items<T>(items: Vec<T>, predicate: &Predicate<'_, T>) -> Vec<T> {
    if predicate.is_match_all() {
        return items;
    }
    items.into_iter().filter(|item| predicate.matches(item)).collect()
}

/// Counts the elements `predicate` accepts without collecting them.
pub fn count_items<T>(items: &[T], predicate: &Predicate<'_, T>) -> usize {
    items.iter().filter(|item| predicate.matches(item)).count()
}

/// Unique values of `accessor` across `items`, in first-seen order.
pub fn distinct_values<T, F, S>(items: &[T], accessor: F) -> Vec<String>
where
    F: Fn(&T) -> S,
    S: Into<String>,
{
    items
        .iter()
        .map(|item| accessor(item).into())
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Stable sort by a chain of directives. The first directive whose
/// comparator does not report `Equal` decides.
///
/// Fails with a validation error if a directive names a field that is not
/// registered as sortable; `items` is left untouched in that case.
pub fn sort_items<T>(
    items: &mut [T],
    specs: &[SortSpec],
    schema: &Schema<T>,
) -> Result<(), OperationError> {
    if specs.is_empty() {
        return Ok(());
    }
    let steps = specs
        .iter()
        .map(|spec| {
            schema
                .sortable_comparator(&spec.field)
                .map(|compare| (compare, spec.direction))
                .ok_or_else(|| {
                    OperationError::validation(format!("field {:?} is not sortable", spec.field))
                        .with_detail("field", spec.field.as_str())
                })
        })
        .collect::<Result<Vec<(&SortComparator<T>, _)>, _>>()?;

    items.sort_by(|a, b| {
        steps
            .iter()
            .map(|(compare, direction)| direction.apply(compare(a, b)))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
    Ok(())
}

pub fn paginate_items<T>(items: Vec<T>, page: &Page) -> Vec<T> {
    page.apply(items)
}
