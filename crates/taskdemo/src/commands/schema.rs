use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;

#[derive(Debug, clap::Args)]
pub(crate) struct SchemaCmd {
    #[arg(
        help="Print the document on a single line instead of indented.",
        long,
    )]
    pub(crate) compact_json: bool,
}

#[inherent::inherent]
impl RunnableCommand for SchemaCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match commands::load_schema() {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!("{err:#}")),
        };
        let doc = schema.introspect();
        if self.compact_json {
            CommandResult::stdout(format_args!("{doc}"))
        } else {
            CommandResult::stdout(format_args!("{doc:#}"))
        }
    }
}
