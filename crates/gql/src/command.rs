use crate::Cli;
use crate::CommandResult;

/// A `gql` subcommand.
///
/// Commands never print or exit on their own; everything they have to say
/// goes into the returned [`CommandResult`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
