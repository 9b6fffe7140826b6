use crate::output_utils;
use crate::pipeline;
use crate::source_files::SourceArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    sources: SourceArgs,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let output = match pipeline::run(&self.sources).await {
            Ok(output) => output,
            Err(e) => return CommandResult::from_error(e),
        };

        if output.has_errors() {
            return CommandResult::stderr(format_args!(
                "{} GraphQL validation errors:\n\n{}",
                output_utils::RED_X,
                output.error_report(),
            ));
        }

        let registry = &output.build.registry;
        let (num_operations, num_fragments) = output.num_executable_definitions();
        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files ({} library files).\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.\n",
                "  * Found {} operations and {} fragments.",
            ),
            output_utils::GREEN_CHECK,
            output.num_files(),
            output.library_files.file_paths.len(),
            output.num_skipped_files(),
            registry.types().count(),
            registry.directive_definitions().count(),
            num_operations,
            num_fragments,
        ))
    }
}
