mod cli;
mod error;
mod quote;

use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return usage_exit(&error),
    };

    match quote::run(&cli).await {
        Ok(()) => {
            println!("{}", cliquoter_core::THANK_YOU_LINE);
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}

/// Help requests and parse failures both land on the usage text with exit
/// status 1; parse failures get the short scolding first.
fn usage_exit(error: &clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    if error.kind() == ErrorKind::DisplayVersion {
        print!("{error}");
        return ExitCode::SUCCESS;
    }

    if error.kind() != ErrorKind::DisplayHelp {
        println!("Incorrect usage!");
    }
    println!("{}", Cli::command().render_help());
    ExitCode::from(1)
}
