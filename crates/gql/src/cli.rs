use crate::commands::CommandEnum;
use clap::CommandFactory;

/// Scans GraphQL SDL files and validates, prints or emits the registry
/// merged from them.
#[derive(clap::Parser, Debug)]
#[command(name = "gql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<CommandEnum>,

    /// Log at debug level, whatever `LOG_LEVEL` says.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Shown when `gql` runs without a subcommand.
    pub(crate) fn print_usage(&self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
