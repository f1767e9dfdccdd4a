//! Header-once tables, `field:value` records and structured fallback.

use crate::operation::MutationOptions;
use crate::output::OutputMode;
use crate::test_support::ticket_schema;

fn compact(input: &str) -> String {
    ticket_schema().run(input, OutputMode::Compact)
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn list_renders_header_once() {
    assert_eq!(
        compact("list(sort_priority=asc) { id, priority }"),
        "id,priority\nt-2,1\nt-3,1\nt-1,2\nt-4,3\n",
    );
}

#[test]
fn cells_are_csv_quoted() {
    assert_eq!(
        compact("list(assignee=bob) { id, title }"),
        "id,title\nt-2,\"Fix bug, urgent\"\n",
    );
    assert_eq!(
        compact("list(status=in-progress) { title }"),
        "title\n\"Review \"\"api\"\"\"\n",
    );
}

#[test]
fn null_cells_are_empty() {
    assert_eq!(compact("list(status=todo) { id, assignee }"), "id,assignee\nt-1,alice\nt-3,\n");
}

#[test]
fn empty_list_still_has_a_header() {
    assert_eq!(compact("list(status=blocked) { id, title }"), "id,title\n");
}

#[test]
fn lone_empty_cell_is_quoted() {
    let one_row = compact("list(status=todo, sort_priority=asc, take=1) { assignee }");
    assert_eq!(one_row, "assignee\n\"\"\n");
    assert_ne!(one_row, compact("list(status=blocked) { assignee }"));
}

#[test]
fn lone_empty_cell_stays_distinct_inside_a_batch() {
    let one_row =
        compact("list(status=todo, sort_priority=asc, take=1) { assignee }; list(status=done) { assignee }");
    assert_eq!(one_row, "assignee\n\"\"\n\nassignee\nbob\n");

    let no_rows = compact("list(status=blocked) { assignee }; list(status=done) { assignee }");
    assert_eq!(no_rows, "assignee\n\nassignee\nbob\n");
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn single_record_renders_field_lines() {
    assert_eq!(
        compact("get(t-4) { id, title, assignee }"),
        "id:t-4\ntitle:Review \"api\"\nassignee:alice\n",
    );
    assert_eq!(compact("get(t-3) { assignee }"), "assignee:\n");
}

#[test]
fn record_values_escape_newlines() {
    let schema = ticket_schema();
    let out = schema.run_mutation(
        "rename(t-1, title=\"line one\\nline two\") { title }",
        &MutationOptions::default(),
        OutputMode::Compact,
    );
    assert_eq!(out, "title:line one\\nline two\n");
}

#[test]
fn scalar_object_values_render_as_records() {
    assert_eq!(compact("count(status=todo)"), "count:2\n");
}

// =============================================================================
// Fallback
// =============================================================================

#[test]
fn non_tabular_values_fall_back_to_structured() {
    assert_eq!(compact("distinct(status)"), r#"["todo","done","in-progress"]"#);
}

#[test]
fn errors_fall_back_to_structured() {
    assert_eq!(
        compact("get(t-404)"),
        r#"{"error":{"code":"NOT_FOUND","message":"ticket t-404 not found"}}"#,
    );
}

// =============================================================================
// Batches
// =============================================================================

#[test]
fn same_shape_batch_is_joined_by_blank_lines() {
    assert_eq!(
        compact("list(status=done) { id }; list(assignee=alice) { id }"),
        "id\nt-2\n\nid\nt-1\nt-4\n",
    );
    assert_eq!(
        compact("get(t-1); get(t-2)"),
        "id:t-1\nstatus:todo\n\nid:t-2\nstatus:done\n",
    );
}

#[test]
fn mixed_batch_falls_back_to_structured() {
    assert_eq!(
        compact("list(status=done) { id }; count()"),
        r#"[[{"id":"t-2"}],{"count":4}]"#,
    );
    assert_eq!(
        compact("list(status=done) { id }; list(status=done) { title }"),
        r#"[[{"id":"t-2"}],[{"title":"Fix bug, urgent"}]]"#,
    );
}

#[test]
fn batch_with_an_error_falls_back_to_structured() {
    let out = compact("get(t-1); get(t-404)");
    assert!(out.starts_with(r#"[{"id":"t-1","status":"todo"},{"error":"#), "{out}");
}

#[test]
fn nested_field_values_fall_back_to_structured() {
    use crate::test_support::ticket_builder;
    use crate::test_support::tickets;

    let mut builder = ticket_builder(tickets());
    builder
        .field("labels", |t: &crate::test_support::Ticket| vec![t.status.clone()])
        .unwrap();
    let schema = builder.build().unwrap();

    let single = schema.run("get(t-1) { id, labels }", OutputMode::Compact);
    assert_eq!(single, r#"{"id":"t-1","labels":["todo"]}"#);

    let list = schema.run("list(status=done) { id, labels }", OutputMode::Compact);
    assert_eq!(list, r#"[{"id":"t-2","labels":["done"]}]"#);
    assert_eq!(list, schema.run("list(status=done) { id, labels }", OutputMode::Compact));
}
