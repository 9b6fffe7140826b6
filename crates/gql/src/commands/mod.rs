pub(crate) mod emit;
mod print;
mod validate;

use crate::Cli;
use crate::CommandResult;
use emit::EmitCmd;
use print::PrintCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gql")]
pub(crate) enum CommandEnum {
    /// Check that GraphQL files parse and merge without errors.
    Validate(Box<ValidateCmd>),

    /// Print the merged type registry as SDL.
    Print(Box<PrintCmd>),

    /// Write the merged type registry in binary form.
    Emit(Box<EmitCmd>),
}
impl CommandEnum {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Validate(_) => "validate",
            Self::Print(_) => "print",
            Self::Emit(_) => "emit",
        }
    }

    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Validate(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Emit(cmd) => cmd.run(cli).await,
        }
    }
}
