mod cli;
mod command;
mod command_result;
mod commands;
mod logging;
mod output_utils;
mod pipeline;
mod source_files;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    logging::setup_logger(cli.verbose);

    let Some(command) = cli.cmd.take() else {
        return match cli.print_usage() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                ExitCode::FAILURE
            },
        };
    };

    log::debug!("Running `gql {}`...", command.name());
    let result = command.run(&cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

#[cfg(test)]
mod tests;
