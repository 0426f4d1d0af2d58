//! CLI argument definitions for topmover.
//!
//! Running the binary without a subcommand performs a scan, matching the
//! tool's one-shot nature; subcommands exist for credential management.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | *(none)* / `scan` | Fetch the tracked symbols and report the top mover |
//! | `key set` | Prompt for and persist the Finnhub API key |
//! | `key clear` | Remove the cached API key |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--no-open` | `false` | Skip opening the CSV in the default viewer |
//! | `--timeout-ms` | `10000` | Per-request timeout in ms |
//! | `--mock` | `false` | Use deterministic offline data |
//!
//! # Examples
//!
//! ```bash
//! # Scan and open the resulting CSV
//! topmover
//!
//! # Scan for machine consumption, leave the file closed
//! topmover scan --format json --pretty --no-open
//!
//! # Re-enter the API key
//! topmover key set
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Find the most volatile of the tracked tech stocks and write it to CSV.
#[derive(Debug, Parser)]
#[command(
    name = "topmover",
    author,
    version,
    about = "Most-volatile-stock scanner backed by Finnhub",
    long_about = "Topmover polls the Finnhub quote API for a fixed set of tech stocks \
(AAPL, AMZN, NFLX, META, GOOGL), selects the one that moved the most from its \
previous close in either direction, and writes that single result to \
most_volatile_stock.csv in the working directory."
)]
pub struct Cli {
    /// Output format for the run summary.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Skip opening the CSV report in the platform default viewer.
    #[arg(long, global = true, default_value_t = false)]
    pub no_open: bool,

    /// Per-request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Use deterministic offline data instead of the live API.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch quotes for the tracked symbols and report the top mover.
    ///
    /// This is also what running `topmover` with no subcommand does.
    Scan,

    /// Manage the cached Finnhub API key.
    Key(KeyArgs),
}

/// Arguments for the `key` command group.
#[derive(Debug, Args)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub command: KeyCommand,
}

/// Credential management subcommands.
#[derive(Debug, Subcommand)]
pub enum KeyCommand {
    /// Prompt for an API key and persist it to the cache file.
    Set,

    /// Remove the cached API key file.
    Clear,
}
