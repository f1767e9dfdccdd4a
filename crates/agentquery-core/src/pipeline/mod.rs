//! Filter, sort and paginate building blocks.
//!
//! Handlers opt in to each stage. The usual order is filter, then sort, then
//! paginate; [`OperationContext::apply_pipeline`](crate::operation::OperationContext::apply_pipeline)
//! runs all three.

mod items;
mod page;
mod predicate;
mod sort_direction;
mod sort_spec;

pub use items::count_items;
pub use items::distinct_values;
pub use items::filter_items;
pub use items::paginate_items;
pub use items::sort_items;
pub use page::Page;
pub use predicate::Predicate;
pub use predicate::eq_ignore_case;
pub use sort_direction::SortDirection;
pub use sort_spec::SortSpec;

#[cfg(test)]
mod tests;
