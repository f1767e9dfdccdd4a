mod mutate;
mod query;
mod schema;

use crate::Cli;
use crate::CommandResult;
use crate::tasks;
use crate::tasks::Task;
use crate::tasks::TaskStore;
use agentquery::ParseError;
use agentquery::execution::Outcome;
use agentquery::output;
use agentquery::output::OutputMode;
use agentquery::schema::Schema;
use anyhow::Context;
use std::sync::Arc;

pub(crate) use mutate::MutateCmd;
pub(crate) use query::QueryCmd;
pub(crate) use schema::SchemaCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "taskdemo")]
pub(crate) enum CommandEnum {
    /// Run read queries.
    Q(Box<QueryCmd>),
    /// Run mutations.
    M(Box<MutateCmd>),
    /// Print the schema introspection document.
    Schema(Box<SchemaCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Q(cmd) => cmd.run(cli).await,
            Self::M(cmd) => cmd.run(cli).await,
            Self::Schema(cmd) => cmd.run(cli).await,
        }
    }
}

/// A fresh schema over the sample tasks.
pub(crate) fn load_schema() -> anyhow::Result<Schema<Task>> {
    let store = Arc::new(TaskStore::with_sample_tasks());
    tasks::task_schema(store).context("Failed to build the task schema")
}

/// Runs `job` on tokio's blocking pool. Query execution is synchronous.
pub(crate) async fn run_blocking<F>(job: F) -> CommandResult
where
    F: FnOnce() -> CommandResult + Send + 'static,
{
    match tokio::task::spawn_blocking(job).await {
        Ok(result) => result,
        Err(err) => CommandResult::stderr(format_args!("Query execution failed: {err}")),
    }
}

/// Renders an execution result. Parse errors render as error payloads, and
/// any failed slot fails the command.
pub(crate) fn render_outcome(result: Result<Outcome, ParseError>, mode: OutputMode) -> CommandResult {
    match result {
        Ok(outcome) => {
            let succeeded = !outcome.has_errors();
            CommandResult::rendered(output::render(&outcome, mode), succeeded)
        },
        Err(err) => {
            log::debug!("{}", err.format_oneline());
            CommandResult::rendered(output::render_parse_error(&err), false)
        },
    }
}
