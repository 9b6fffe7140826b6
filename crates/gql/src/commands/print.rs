use crate::output_utils;
use crate::pipeline;
use crate::source_files::SourceArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgql_ast::ast::Document;
use libgql_ast::print_document;
use libgql_ast::Node;
use std::process::ExitCode;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Also print definitions that came from --library paths.",
        long,
    )]
    include_library: bool,

    #[arg(
        help="Print only the named types, merged with their extensions.",
        long="type",
        name="TYPE_NAME",
        value_delimiter = ',',
    )]
    type_names: Vec<String>,

    #[command(flatten)]
    sources: SourceArgs,
}

impl PrintCmd {
    fn render(&self, output: &pipeline::PipelineOutput) -> Result<String, String> {
        let registry = &output.build.registry;
        let mut document = if self.type_names.is_empty() {
            registry.to_document()
        } else {
            let mut definitions = vec![];
            for name in &self.type_names {
                match registry.merged_type_definition(name) {
                    Some(def) => definitions.push(def.into()),
                    None => return Err(format!("No type named `{name}` was found.")),
                }
            }
            Document {
                definitions,
                ..Document::default()
            }
        };

        if !self.include_library {
            document
                .definitions
                .retain(|def| !Node::from(def.clone()).provenance().is_read_only());
        }
        Ok(print_document(&document))
    }
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let output = match pipeline::run(&self.sources).await {
            Ok(output) => output,
            Err(e) => return CommandResult::from_error(e),
        };

        let printed = match self.render(&output) {
            Ok(printed) => printed,
            Err(message) => {
                return CommandResult::stderr(format_args!(
                    "{} {message}",
                    output_utils::RED_X,
                ));
            },
        };

        // The printed registry is best-effort; problems still fail the run.
        if output.has_errors() {
            return CommandResult {
                exit_code: ExitCode::FAILURE,
                stderr: Some(output.error_report()),
                stdout: Some(printed),
            };
        }
        CommandResult::stdout(format_args!("{printed}"))
    }
}
