mod key;
mod scan;

use std::path::Path;

use topmover_core::{ApiKeyStore, REPORT_FILE};

use crate::cli::{Cli, Command, KeyCommand};
use crate::error::CliError;
use crate::summary::RunSummary;

/// What a command hands back to `main` for rendering.
pub enum CommandOutput {
    /// A completed scan, rendered via `output` and followed by the opener.
    Scan(RunSummary),
    /// A one-line status message.
    Message(String),
}

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    let store = ApiKeyStore::default();

    match &cli.command {
        None | Some(Command::Scan) => {
            let summary =
                scan::run(&store, Path::new(REPORT_FILE), cli.timeout_ms, cli.mock).await?;
            Ok(CommandOutput::Scan(summary))
        }
        Some(Command::Key(args)) => match args.command {
            KeyCommand::Set => key::set(&store).map(CommandOutput::Message),
            KeyCommand::Clear => key::clear(&store).map(CommandOutput::Message),
        },
    }
}
