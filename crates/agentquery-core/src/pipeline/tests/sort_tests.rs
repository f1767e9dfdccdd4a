//! Sort directive parsing and stable multi-key sorting.

use crate::operation::ErrorCode;
use crate::pipeline::SortDirection;
use crate::pipeline::SortSpec;
use crate::pipeline::sort_items;
use crate::test_support::ticket_schema;
use crate::test_support::tickets;
use std::cmp::Ordering;

fn sorted_ids(specs: &[SortSpec]) -> Vec<String> {
    let schema = ticket_schema();
    let mut items = tickets();
    sort_items(&mut items, specs, &schema).unwrap();
    items.into_iter().map(|t| t.id).collect()
}

#[test]
fn direction_parse() {
    assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
    assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
    assert_eq!(SortDirection::parse(""), Some(SortDirection::Asc));
    assert_eq!(SortDirection::parse("up"), None);
    assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
}

#[test]
fn parse_all_keeps_directive_order() {
    let specs = SortSpec::parse_all([
        ("status", "todo"),
        ("sort_priority", "desc"),
        ("sort_title", "Asc"),
    ])
    .unwrap();
    assert_eq!(
        specs,
        [
            SortSpec::new("priority", SortDirection::Desc),
            SortSpec::new("title", SortDirection::Asc),
        ],
    );
}

#[test]
fn parse_all_rejects_bare_prefix() {
    let err = SortSpec::parse_all([("sort_", "asc")]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);
    assert_eq!(err.message(), "sort_ prefix requires a field name");
}

#[test]
fn parse_all_rejects_bad_direction() {
    let err = SortSpec::parse_all([("sort_title", "sideways")]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);
    assert_eq!(err.message(), "sort direction must be 'asc' or 'desc', got \"sideways\"");
}

#[test]
fn ascending_sort_is_stable() {
    let ids = sorted_ids(&[SortSpec::new("priority", SortDirection::Asc)]);
    assert_eq!(ids, ["t-2", "t-3", "t-1", "t-4"]);
}

#[test]
fn descending_sort_is_stable() {
    let ids = sorted_ids(&[SortSpec::new("priority", SortDirection::Desc)]);
    assert_eq!(ids, ["t-4", "t-1", "t-2", "t-3"]);
}

#[test]
fn later_directives_break_ties() {
    let ids = sorted_ids(&[
        SortSpec::new("priority", SortDirection::Asc),
        SortSpec::new("title", SortDirection::Desc),
    ]);
    assert_eq!(ids, ["t-3", "t-2", "t-1", "t-4"]);
}

#[test]
fn unsortable_field_leaves_items_untouched() {
    let schema = ticket_schema();
    let mut items = tickets();
    let err = sort_items(
        &mut items,
        &[
            SortSpec::new("priority", SortDirection::Asc),
            SortSpec::new("status", SortDirection::Asc),
        ],
        &schema,
    )
    .unwrap_err();
    assert_eq!(err.message(), "field \"status\" is not sortable");
    assert_eq!(items, tickets());
}

fn status_rank(status: &str) -> u8 {
    match status {
        "todo" => 0,
        "in-progress" => 1,
        "done" => 2,
        _ => u8::MAX,
    }
}

#[test]
fn custom_comparator_orders_by_rank() {
    use crate::output::OutputMode;
    use crate::test_support::Ticket;
    use crate::test_support::ticket_builder;

    let mut builder = ticket_builder(tickets());
    builder
        .sortable_field_by("status", |a: &Ticket, b: &Ticket| {
            status_rank(&a.status).cmp(&status_rank(&b.status))
        })
        .unwrap();
    let schema = builder.build().unwrap();

    let mut items = tickets();
    sort_items(&mut items, &[SortSpec::new("status", SortDirection::Asc)], &schema).unwrap();
    let ids: Vec<_> = items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t-1", "t-3", "t-4", "t-2"]);

    assert_eq!(
        schema.run("list(sort_status=desc) { id }", OutputMode::Compact),
        "id\nt-2\nt-4\nt-1\nt-3\n",
    );
}
