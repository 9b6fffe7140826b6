use crate::output_utils;
use crate::pipeline;
use crate::source_files::SourceArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgql_registry::Registry;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct EmitCmd {
    #[arg(
        help="File to write the encoded registry to.",
        long,
        short='o',
    )]
    out: PathBuf,

    #[arg(
        help="Write the best-effort registry even if errors were found.",
        long,
    )]
    allow_errors: bool,

    #[command(flatten)]
    sources: SourceArgs,
}

/// Encodes `registry` with bincode's standard configuration.
pub(crate) fn encode_registry(registry: &Registry) -> anyhow::Result<Vec<u8>> {
    bincode::serde::encode_to_vec(registry, bincode::config::standard())
        .context("Failed to encode the registry")
}

#[cfg(test)]
pub(crate) fn decode_registry(bytes: &[u8]) -> anyhow::Result<Registry> {
    let (registry, _) =
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())
            .context("Failed to decode the registry")?;
    Ok(registry)
}

async fn write_registry(registry: &Registry, out: &Path) -> anyhow::Result<usize> {
    let bytes = encode_registry(registry)?;
    tokio::fs::write(out, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;
    Ok(bytes.len())
}

#[inherent::inherent]
impl RunnableCommand for EmitCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let output = match pipeline::run(&self.sources).await {
            Ok(output) => output,
            Err(e) => return CommandResult::from_error(e),
        };

        if output.has_errors() && !self.allow_errors {
            return CommandResult::stderr(format_args!(
                "{} Not writing {} because of errors (pass --allow-errors \
                to write anyway):\n\n{}",
                output_utils::RED_X,
                self.out.display(),
                output.error_report(),
            ));
        }

        match write_registry(&output.build.registry, &self.out).await {
            Ok(num_bytes) => CommandResult::stdout(format_args!(
                "{} Wrote {} types ({num_bytes} bytes) to {}.",
                output_utils::GREEN_CHECK,
                output.build.registry.types().count(),
                self.out.display(),
            )),
            Err(e) => CommandResult::from_error(e),
        }
    }
}
