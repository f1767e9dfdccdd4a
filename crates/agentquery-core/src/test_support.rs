//! A small ticket tracker used as the host element type across the test
//! suites.

use crate::operation::MutationMetadata;
use crate::operation::OperationError;
use crate::operation::OperationMetadata;
use crate::operation::Output;
use crate::operation::ParameterDef;
use crate::pipeline::count_items;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use serde_json::json;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Ticket {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: u8,
    pub assignee: Option<String>,
}

pub(crate) fn ticket(
    id: &str,
    title: &str,
    status: &str,
    priority: u8,
    assignee: Option<&str>,
) -> Ticket {
    Ticket {
        id: id.to_string(),
        title: title.to_string(),
        status: status.to_string(),
        priority,
        assignee: assignee.map(str::to_string),
    }
}

pub(crate) fn tickets() -> Vec<Ticket> {
    vec![
        ticket("t-1", "Write docs", "todo", 2, Some("alice")),
        ticket("t-2", "Fix bug, urgent", "done", 1, Some("bob")),
        ticket("t-3", "Ship release", "todo", 1, None),
        ticket("t-4", "Review \"api\"", "in-progress", 3, Some("alice")),
    ]
}

/// Fields, presets, filters, sorts, `get`/`list`/`count` reads and
/// `close`/`purge`/`rename` mutations over [`tickets`].
pub(crate) fn ticket_builder(items: Vec<Ticket>) -> SchemaBuilder<Ticket> {
    let mut builder = SchemaBuilder::<Ticket>::new();
    builder
        .field("id", |t: &Ticket| t.id.clone())
        .and_then(|b| b.field("title", |t: &Ticket| t.title.clone()))
        .and_then(|b| b.field("status", |t: &Ticket| t.status.clone()))
        .and_then(|b| b.field("priority", |t: &Ticket| t.priority))
        .and_then(|b| b.field("assignee", |t: &Ticket| t.assignee.clone()))
        .and_then(|b| b.preset("minimal", ["id", "status"]))
        .and_then(|b| b.preset("overview", ["id", "title", "status", "assignee"]))
        .and_then(|b| b.filterable_field("status", |t: &Ticket| t.status.clone()))
        .and_then(|b| {
            b.filterable_field("assignee", |t: &Ticket| t.assignee.clone().unwrap_or_default())
        })
        .and_then(|b| b.sortable_field("priority", |t: &Ticket| t.priority))
        .and_then(|b| b.sortable_field("title", |t: &Ticket| t.title.clone()))
        .and_then(|b| {
            b.operation_with_metadata(
                "get",
                |ctx| {
                    let id = ctx.require_positional_arg("id")?;
                    let item = ctx
                        .items()?
                        .into_iter()
                        .find(|t| t.id == id)
                        .ok_or_else(|| OperationError::not_found(format!("ticket {id} not found")))?;
                    Ok(Output::Item(item))
                },
                OperationMetadata::new("Fetch one ticket by id.")
                    .param(ParameterDef::new("id", "string").required())
                    .example("get(t-1) { overview }"),
            )
        })
        .and_then(|b| {
            b.operation("list", |ctx| {
                let items = ctx.items()?;
                Ok(Output::Items(ctx.apply_pipeline(items)?))
            })
        })
        .and_then(|b| {
            b.operation("count", |ctx| {
                let items = ctx.items()?;
                Ok(Output::value(json!({ "count": count_items(&items, ctx.predicate()) })))
            })
        })
        .and_then(|b| {
            b.mutation_with_metadata(
                "close",
                |ctx| {
                    let id = ctx.require_positional_arg("id")?;
                    let resolution = ctx.arg_or("resolution", "fixed");
                    Ok(Output::value(json!({
                        "id": id,
                        "resolution": resolution,
                        "dry_run": ctx.is_dry_run(),
                    })))
                },
                MutationMetadata::new("Close a ticket.")
                    .param(ParameterDef::new("id", "string").required())
                    .param(ParameterDef::new("resolution", "string").one_of(["fixed", "wontfix"]))
                    .idempotent(),
            )
        })
        .and_then(|b| {
            b.mutation_with_metadata(
                "purge",
                |ctx| {
                    let id = ctx.require_positional_arg("id")?;
                    Ok(Output::value(json!({ "purged": id })))
                },
                MutationMetadata::new("Delete a ticket permanently.")
                    .param(ParameterDef::new("id", "string").required())
                    .destructive(),
            )
        })
        .and_then(|b| {
            b.mutation("rename", |ctx| {
                let id = ctx.require_positional_arg("id")?;
                let title = ctx.require_arg("title")?;
                let mut item = ctx
                    .items()?
                    .into_iter()
                    .find(|t| t.id == id)
                    .ok_or_else(|| OperationError::not_found(format!("ticket {id} not found")))?;
                item.title = title.to_string();
                Ok(Output::Item(item))
            })
        })
        .expect("ticket fixture registrations are valid");
    builder.default_fields(["minimal"]);
    builder.loader(move || Ok(items.clone()));
    builder
}

pub(crate) fn ticket_schema() -> Schema<Ticket> {
    ticket_builder(tickets())
        .build()
        .expect("ticket fixture schema builds")
}
