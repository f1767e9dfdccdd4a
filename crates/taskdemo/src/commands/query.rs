use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use crate::tasks::Task;
use agentquery::output::OutputMode;
use agentquery::schema::Schema;

#[derive(Debug, clap::Args)]
pub(crate) struct QueryCmd {
    #[arg(
        help="One or more `;`-separated read queries, e.g. \
             'list(status=done) { overview }'.",
        name="QUERY",
    )]
    pub(crate) query: String,

    #[arg(
        help="Output format: `json`, `compact` or `llm`.",
        long,
        short='f',
    )]
    pub(crate) format: OutputMode,
}

impl QueryCmd {
    pub(crate) fn execute(&self, schema: &Schema<Task>) -> CommandResult {
        log::debug!("Running {:?} with {} output.", self.query, self.format);
        commands::render_outcome(schema.execute(&self.query), self.format)
    }
}

#[inherent::inherent]
impl RunnableCommand for QueryCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match commands::load_schema() {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!("{err:#}")),
        };
        commands::run_blocking(move || self.execute(&schema)).await
    }
}
