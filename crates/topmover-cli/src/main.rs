mod cli;
mod commands;
mod error;
mod opener;
mod output;
mod summary;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    match commands::run(&cli).await? {
        commands::CommandOutput::Scan(summary) => {
            output::render(&summary, cli.format, cli.pretty)?;

            if !cli.no_open {
                if let Err(reason) = opener::open_default_viewer(&summary.report_path) {
                    eprintln!("warning: could not open {}: {reason}", summary.report_path);
                }
            }
        }
        commands::CommandOutput::Message(message) => {
            println!("{message}");
        }
    }

    Ok(())
}
