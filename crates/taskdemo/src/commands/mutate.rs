use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use crate::tasks::Task;
use agentquery::operation::MutationOptions;
use agentquery::output::OutputMode;
use agentquery::schema::Schema;

#[derive(Debug, clap::Args)]
pub(crate) struct MutateCmd {
    #[arg(
        help="One or more `;`-separated mutations, e.g. \
             'update(task-1, status=done)'.",
        name="MUTATION",
    )]
    pub(crate) query: String,

    #[arg(
        help="Output format: `json`, `compact` or `llm`.",
        long,
        short='f',
    )]
    pub(crate) format: OutputMode,

    #[arg(
        help="Allow mutations marked destructive to run.",
        long,
    )]
    pub(crate) confirm: bool,

    #[arg(
        help="Preview the mutation without changing anything.",
        long,
    )]
    pub(crate) dry_run: bool,
}

impl MutateCmd {
    pub(crate) fn options(&self) -> MutationOptions {
        MutationOptions {
            confirmed: self.confirm,
            dry_run: self.dry_run,
        }
    }

    pub(crate) fn execute(&self, schema: &Schema<Task>) -> CommandResult {
        let options = self.options();
        log::debug!("Running {:?} with {options:?}.", self.query);
        commands::render_outcome(schema.mutate(&self.query, &options), self.format)
    }
}

#[inherent::inherent]
impl RunnableCommand for MutateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match commands::load_schema() {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!("{err:#}")),
        };
        commands::run_blocking(move || self.execute(&schema)).await
    }
}
