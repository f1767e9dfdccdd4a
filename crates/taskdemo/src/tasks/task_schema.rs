use crate::tasks::NewTask;
use crate::tasks::Priority;
use crate::tasks::Status;
use crate::tasks::Task;
use crate::tasks::TaskStore;
use agentquery::operation::HandlerResult;
use agentquery::operation::MutationMetadata;
use agentquery::operation::OperationContext;
use agentquery::operation::OperationError;
use agentquery::operation::OperationMetadata;
use agentquery::operation::Output;
use agentquery::operation::ParameterDef;
use agentquery::pipeline::count_items;
use agentquery::schema::Schema;
use agentquery::schema::SchemaBuildError;
use agentquery::schema::SchemaBuilder;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use std::sync::Arc;

const STATUS_VALUES: [&str; 3] = ["todo", "in-progress", "done"];
const PRIORITY_VALUES: [&str; 3] = ["low", "medium", "high"];

/// Wires the task domain into a query schema backed by `store`.
pub(crate) fn task_schema(store: Arc<TaskStore>) -> Result<Schema<Task>, SchemaBuildError> {
    let mut builder = SchemaBuilder::<Task>::new();
    register_fields(&mut builder)?;
    register_reads(&mut builder)?;
    register_mutations(&mut builder, &store)?;

    let loader_store = Arc::clone(&store);
    builder.loader(move || loader_store.snapshot());
    builder.build()
}

fn register_fields(builder: &mut SchemaBuilder<Task>) -> Result<(), SchemaBuildError> {
    builder
        .field("id", |t: &Task| t.id.clone())?
        .field("name", |t: &Task| t.name.clone())?
        .field("status", |t: &Task| t.status.as_str())?
        .field("assignee", |t: &Task| t.assignee.clone())?
        .field("priority", |t: &Task| t.priority.as_str())?
        .field("description", |t: &Task| t.description.clone())?
        .preset("minimal", ["id", "status"])?
        .preset("default", ["id", "name", "status"])?
        .preset("overview", ["id", "name", "status", "assignee", "priority"])?
        .preset("full", ["id", "name", "status", "assignee", "priority", "description"])?
        .filterable_field("status", |t: &Task| t.status.as_str())?
        .filterable_field("assignee", |t: &Task| t.assignee.clone())?
        .filterable_field("priority", |t: &Task| t.priority.as_str())?
        .sortable_field("id", |t: &Task| t.id.clone())?
        .sortable_field("name", |t: &Task| t.name.clone())?
        .sortable_field("status", |t: &Task| t.status)?
        .sortable_field("assignee", |t: &Task| t.assignee.clone())?
        .sortable_field("priority", |t: &Task| t.priority)?
        .default_fields(["default"]);
    Ok(())
}

// =============================================================================
// Reads
// =============================================================================

fn register_reads(builder: &mut SchemaBuilder<Task>) -> Result<(), SchemaBuildError> {
    builder
        .operation_with_metadata(
            "get",
            get,
            OperationMetadata::new("Find a single task by ID")
                .param(
                    ParameterDef::new("id", "string")
                        .required()
                        .with_description("Task ID (positional)"),
                )
                .example("get(task-1) { overview }")
                .example("get(task-3) { full }"),
        )?
        .operation_with_metadata(
            "list",
            list,
            OperationMetadata::new("List tasks with optional filters, sorting, and pagination")
                .param(ParameterDef::new("status", "string").with_description("Filter by status"))
                .param(ParameterDef::new("assignee", "string").with_description("Filter by assignee"))
                .param(ParameterDef::new("priority", "string").with_description("Filter by priority"))
                .param(
                    ParameterDef::new("sort_<field>", "asc|desc")
                        .with_description("Sort by field (id, name, status, assignee, priority)"),
                )
                .param(
                    ParameterDef::new("skip", "int")
                        .with_default(0)
                        .with_description("Skip first N items"),
                )
                .param(ParameterDef::new("take", "int").with_description("Return at most N items"))
                .example("list() { overview }")
                .example("list(status=done) { minimal }")
                .example("list(status=done, sort_name=desc, skip=0, take=2) { overview }"),
        )?
        .operation_with_metadata(
            "count",
            count,
            OperationMetadata::new("Count tasks matching optional filters")
                .param(ParameterDef::new("status", "string").with_description("Filter by status"))
                .param(ParameterDef::new("assignee", "string").with_description("Filter by assignee"))
                .example("count()")
                .example("count(status=done)"),
        )?
        .operation_with_metadata(
            "summary",
            summary,
            OperationMetadata::new("Return counts grouped by status").example("summary()"),
        )?;
    Ok(())
}

fn get(ctx: &OperationContext<'_, Task>) -> HandlerResult<Task> {
    let id = ctx.require_positional_arg("task ID")?;
    let task = ctx
        .items()?
        .into_iter()
        .find(|task| task.id == id)
        .ok_or_else(|| {
            OperationError::not_found(format!("task {id:?} not found")).with_detail("id", id)
        })?;
    Ok(Output::Item(task))
}

fn list(ctx: &OperationContext<'_, Task>) -> HandlerResult<Task> {
    let items = ctx.items()?;
    Ok(Output::Items(ctx.apply_pipeline(items)?))
}

fn count(ctx: &OperationContext<'_, Task>) -> HandlerResult<Task> {
    let items = ctx.items()?;
    Ok(Output::value(json!({ "count": count_items(&items, ctx.predicate()) })))
}

/// Counts per status, in workflow order. Ignores field projections.
fn summary(ctx: &OperationContext<'_, Task>) -> HandlerResult<Task> {
    let items = ctx.items()?;
    let counts: Map<String, Value> = Status::ALL
        .iter()
        .map(|status| {
            let n = items.iter().filter(|task| task.status == *status).count();
            (status.as_str().to_string(), Value::from(n))
        })
        .collect();
    Ok(Output::value(json!({ "total": items.len(), "counts": counts })))
}

// =============================================================================
// Mutations
// =============================================================================

fn register_mutations(
    builder: &mut SchemaBuilder<Task>,
    store: &Arc<TaskStore>,
) -> Result<(), SchemaBuildError> {
    let create_store = Arc::clone(store);
    let update_store = Arc::clone(store);
    let delete_store = Arc::clone(store);
    builder
        .mutation_with_metadata(
            "create",
            move |ctx| create(ctx, &create_store),
            MutationMetadata::new("Create a new task")
                .param(ParameterDef::new("title", "string").required().with_description("Task title"))
                .param(
                    ParameterDef::new("status", "string")
                        .one_of(STATUS_VALUES)
                        .with_default("todo")
                        .with_description("Task status"),
                )
                .param(ParameterDef::new("assignee", "string").with_description("Assignee username"))
                .param(
                    ParameterDef::new("priority", "string")
                        .one_of(PRIORITY_VALUES)
                        .with_default("medium")
                        .with_description("Task priority"),
                )
                .example(r#"create(title="Fix login bug")"#)
                .example(r#"create(title="New feature", status=in-progress, assignee=alice, priority=high)"#),
        )?
        .mutation_with_metadata(
            "update",
            move |ctx| update(ctx, &update_store),
            MutationMetadata::new("Update task fields by ID")
                .param(
                    ParameterDef::new("id", "string")
                        .required()
                        .with_description("Task ID (positional)"),
                )
                .param(ParameterDef::new("title", "string").with_description("New title"))
                .param(
                    ParameterDef::new("status", "string")
                        .one_of(STATUS_VALUES)
                        .with_description("New status"),
                )
                .param(ParameterDef::new("assignee", "string").with_description("New assignee"))
                .param(
                    ParameterDef::new("priority", "string")
                        .one_of(PRIORITY_VALUES)
                        .with_description("New priority"),
                )
                .example("update(task-1, status=done)")
                .example(r#"update(task-1, title="New title", assignee=bob)"#)
                .idempotent(),
        )?
        .mutation_with_metadata(
            "delete",
            move |ctx| delete(ctx, &delete_store),
            MutationMetadata::new("Delete a task by ID")
                .param(
                    ParameterDef::new("id", "string")
                        .required()
                        .with_description("Task ID (positional)"),
                )
                .example("delete(task-1)")
                .destructive()
                .idempotent(),
        )?;
    Ok(())
}

fn create(ctx: &OperationContext<'_, Task>, store: &TaskStore) -> HandlerResult<Task> {
    let new_task = NewTask {
        name: ctx.require_arg("title")?.to_string(),
        status: parse_arg(ctx, "status")?.unwrap_or(Status::Todo),
        assignee: ctx.arg_or("assignee", "").to_string(),
        priority: parse_arg(ctx, "priority")?.unwrap_or(Priority::Medium),
    };
    if ctx.is_dry_run() {
        return Ok(Output::value(json!({
            "dry_run": true,
            "would_create": {
                "title": new_task.name,
                "status": new_task.status.as_str(),
                "assignee": new_task.assignee,
                "priority": new_task.priority.as_str(),
            },
        })));
    }
    Ok(Output::Item(store.create(new_task)?))
}

fn update(ctx: &OperationContext<'_, Task>, store: &TaskStore) -> HandlerResult<Task> {
    let id = ctx.require_positional_arg("task ID")?;
    let title = ctx.arg("title");
    let status: Option<Status> = parse_arg(ctx, "status")?;
    let assignee = ctx.arg("assignee");
    let priority: Option<Priority> = parse_arg(ctx, "priority")?;

    if ctx.is_dry_run() {
        let mut changes = Map::new();
        if let Some(title) = title {
            changes.insert("title".to_string(), Value::from(title));
        }
        if let Some(status) = status {
            changes.insert("status".to_string(), Value::from(status.as_str()));
        }
        if let Some(assignee) = assignee {
            changes.insert("assignee".to_string(), Value::from(assignee));
        }
        if let Some(priority) = priority {
            changes.insert("priority".to_string(), Value::from(priority.as_str()));
        }
        store.find(id)?;
        return Ok(Output::value(json!({
            "dry_run": true,
            "id": id,
            "would_update": changes,
        })));
    }

    let updated = store.update(id, |task| {
        if let Some(title) = title {
            task.name = title.to_string();
        }
        if let Some(status) = status {
            task.status = status;
        }
        if let Some(assignee) = assignee {
            task.assignee = assignee.to_string();
        }
        if let Some(priority) = priority {
            task.priority = priority;
        }
    })?;
    Ok(Output::Item(updated))
}

fn delete(ctx: &OperationContext<'_, Task>, store: &TaskStore) -> HandlerResult<Task> {
    let id = ctx.require_positional_arg("task ID")?;
    if ctx.is_dry_run() {
        let task = store.find(id)?;
        return Ok(Output::value(json!({
            "dry_run": true,
            "would_delete": {
                "id": task.id,
                "title": task.name,
                "status": task.status.as_str(),
            },
        })));
    }
    let removed = store.remove(id)?;
    Ok(Output::value(json!({
        "deleted": true,
        "id": removed.id,
        "title": removed.name,
    })))
}

/// Parses an optional enumerated argument. Values were already checked
/// against the declared enum, so a failure here is a handler bug surfaced as
/// `INVALID_VALUE`.
fn parse_arg<V>(ctx: &OperationContext<'_, Task>, name: &str) -> Result<Option<V>, OperationError>
where
    V: std::str::FromStr,
    V::Err: std::fmt::Display,
{
    ctx.arg(name)
        .map(|raw| {
            raw.parse::<V>().map_err(|err| {
                OperationError::invalid_value(err.to_string()).with_detail("param", name)
            })
        })
        .transpose()
}
