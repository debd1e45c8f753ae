mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, notify, scan};
use terminal::{logging, print};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let result = match commands.command {
        Some(Commands::Scan { prefix }) => {
            print::header("scanning interfaces", commands.quiet);
            scan::scan(&commands.config, prefix)
        }
        Some(Commands::Notify { dry_run }) => {
            print::header("discovering addresses", commands.quiet);
            notify::notify(&commands.config, dry_run, commands.quiet).await
        }
        None => {
            print::header("discovering addresses", commands.quiet);
            notify::notify(&commands.config, false, commands.quiet).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
