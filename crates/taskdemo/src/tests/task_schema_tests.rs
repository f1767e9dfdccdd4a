use crate::tests::utils::ids;
use crate::tests::utils::mutate;
use crate::tests::utils::read;
use crate::tests::utils::sample_schema;
use agentquery::execution::QueryResult;
use agentquery::operation::ErrorCode;
use agentquery::operation::MutationOptions;
use agentquery::output::OutputMode;
use serde_json::json;

// =============================================================================
// Reads
// =============================================================================

#[test]
fn get_uses_the_default_preset() {
    let (_, schema) = sample_schema();
    assert_eq!(
        read(&schema, "get(task-1)"),
        json!({ "id": "task-1", "name": "Auth service refactor", "status": "in-progress" }),
    );
}

#[test]
fn get_compact_overview() {
    let (_, schema) = sample_schema();
    assert_eq!(
        schema.run("get(task-3) { overview }", OutputMode::Compact),
        "id:task-3\nname:Fix login redirect bug\nstatus:done\nassignee:alice\npriority:high\n",
    );
}

#[test]
fn get_unknown_task() {
    let (_, schema) = sample_schema();
    assert_eq!(
        read(&schema, "get(task-99)"),
        json!({
            "error": {
                "code": "NOT_FOUND",
                "message": "task \"task-99\" not found",
                "details": { "id": "task-99" }
            }
        }),
    );
}

#[test]
fn status_sorts_by_workflow_rank() {
    let (_, schema) = sample_schema();
    let out = read(&schema, "list(sort_status=asc) { id }");
    assert_eq!(
        ids(&out),
        ["task-2", "task-6", "task-1", "task-5", "task-8", "task-3", "task-4", "task-7"],
    );
}

#[test]
fn priority_sorts_by_rank_then_name() {
    let (_, schema) = sample_schema();
    let out = read(&schema, "list(sort_priority=desc, sort_name=asc) { id }");
    assert_eq!(
        ids(&out),
        ["task-1", "task-3", "task-8", "task-6", "task-2", "task-5", "task-4", "task-7"],
    );
}

#[test]
fn list_filters_and_pages() {
    let (_, schema) = sample_schema();
    let out = read(&schema, "list(status=done, sort_name=desc, skip=0, take=2) { id }");
    assert_eq!(ids(&out), ["task-7", "task-3"]);
}

#[test]
fn count_and_summary() {
    let (_, schema) = sample_schema();
    assert_eq!(read(&schema, "count(status=DONE)"), json!({ "count": 3 }));
    assert_eq!(read(&schema, "count(status=todo, assignee=bob)"), json!({ "count": 1 }));
    assert_eq!(
        read(&schema, "summary()"),
        json!({ "total": 8, "counts": { "todo": 2, "in-progress": 3, "done": 3 } }),
    );
}

#[test]
fn distinct_priorities_first_seen() {
    let (_, schema) = sample_schema();
    assert_eq!(read(&schema, "distinct(priority)"), json!(["high", "medium", "low"]));
}

#[test]
fn introspection_lists_the_domain() {
    let (_, schema) = sample_schema();
    let doc = schema.introspect();
    assert_eq!(
        doc["operations"],
        json!(["count", "distinct", "get", "list", "schema", "summary"]),
    );
    assert_eq!(doc["mutations"], json!(["create", "delete", "update"]));
    assert_eq!(doc["defaultFields"], json!(["id", "name", "status"]));
    assert_eq!(doc["mutationMetadata"]["delete"]["destructive"], json!(true));
    assert_eq!(doc["mutationMetadata"]["update"]["idempotent"], json!(true));
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn create_adds_a_task() {
    let (store, schema) = sample_schema();
    let outcome = mutate(
        &schema,
        r#"create(title="Write tests", priority=HIGH) { full }"#,
        MutationOptions::default(),
    );
    assert_eq!(
        outcome.to_value(),
        json!({
            "id": "task-9",
            "name": "Write tests",
            "status": "todo",
            "assignee": "",
            "priority": "high",
            "description": ""
        }),
    );
    assert_eq!(store.snapshot().unwrap().len(), 9);
    assert_eq!(read(&schema, "count()"), json!({ "count": 9 }));
}

#[test]
fn create_dry_run_changes_nothing() {
    let (store, schema) = sample_schema();
    let outcome = mutate(&schema, r#"create(title="Preview")"#, MutationOptions::dry_run());
    assert_eq!(
        outcome.to_value(),
        json!({
            "dry_run": true,
            "would_create": {
                "title": "Preview",
                "status": "todo",
                "assignee": "",
                "priority": "medium"
            }
        }),
    );
    assert_eq!(store.snapshot().unwrap().len(), 8);
}

#[test]
fn create_reports_every_invalid_param() {
    let (_, schema) = sample_schema();
    let outcome = mutate(&schema, "create(status=blocked)", MutationOptions::default());
    let QueryResult::Error(err) = &outcome.results()[0] else {
        panic!("expected an error slot, got {outcome:?}");
    };
    assert_eq!(err.code(), ErrorCode::Required);
    assert_eq!(err.details()["errors"].as_array().map(Vec::len), Some(2));
}

#[test]
fn update_changes_fields() {
    let (store, schema) = sample_schema();
    let outcome = mutate(
        &schema,
        "update(task-1, status=done, assignee=erin)",
        MutationOptions::default(),
    );
    assert_eq!(
        outcome.to_value(),
        json!({ "id": "task-1", "name": "Auth service refactor", "status": "done" }),
    );
    assert_eq!(store.find("task-1").unwrap().assignee, "erin");
}

#[test]
fn update_dry_run_lists_changes() {
    let (store, schema) = sample_schema();
    let outcome = mutate(&schema, "update(task-1, status=done, dry_run=yes)", MutationOptions::default());
    assert_eq!(
        outcome.to_value(),
        json!({ "dry_run": true, "id": "task-1", "would_update": { "status": "done" } }),
    );
    assert_eq!(store.find("task-1").unwrap().status, crate::tasks::Status::InProgress);
}

#[test]
fn update_unknown_task() {
    let (_, schema) = sample_schema();
    let outcome = mutate(&schema, "update(task-99, status=done)", MutationOptions::default());
    assert_eq!(outcome.results()[0].error().map(|e| e.code()), Some(ErrorCode::NotFound));
}

#[test]
fn delete_requires_confirmation() {
    let (store, schema) = sample_schema();
    let outcome = mutate(&schema, "delete(task-1)", MutationOptions::default());
    assert_eq!(outcome.results()[0].error().map(|e| e.code()), Some(ErrorCode::Forbidden));
    assert_eq!(store.snapshot().unwrap().len(), 8);

    let outcome = mutate(&schema, "delete(task-1)", MutationOptions::confirmed());
    assert_eq!(
        outcome.to_value(),
        json!({ "deleted": true, "id": "task-1", "title": "Auth service refactor" }),
    );
    assert_eq!(read(&schema, "count()"), json!({ "count": 7 }));
}

#[test]
fn confirmed_delete_dry_run_previews() {
    let (store, schema) = sample_schema();
    let options = MutationOptions {
        confirmed: true,
        dry_run: true,
    };
    let outcome = mutate(&schema, "delete(task-4)", options);
    assert_eq!(
        outcome.to_value(),
        json!({
            "dry_run": true,
            "would_delete": { "id": "task-4", "title": "Add dark mode", "status": "done" }
        }),
    );
    assert_eq!(store.snapshot().unwrap().len(), 8);
}
