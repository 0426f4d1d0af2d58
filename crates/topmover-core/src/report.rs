//! CSV report output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{ReportError, TopMover};

/// Output file name, relative to the working directory. Overwritten on
/// every run.
pub const REPORT_FILE: &str = "most_volatile_stock.csv";

/// Column names, in the order they are written.
pub const CSV_HEADER: [&str; 4] = [
    "stock_symbol",
    "percentage_change",
    "current_price",
    "last_close_price",
];

/// Overwrite `path` with the fixed header row and exactly one data row.
pub fn write_report(path: &Path, mover: &TopMover) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let row = [
        csv_field(mover.symbol.as_str()),
        mover.percent_change.to_string(),
        mover.current_price.to_string(),
        mover.previous_close.to_string(),
    ];

    writeln!(writer, "{}", CSV_HEADER.join(","))
        .and_then(|()| writeln!(writer, "{}", row.join(",")))
        .and_then(|()| writer.flush())
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Symbols are short uppercase tickers, so quoting is almost never needed;
/// escape anyway if a field ever carries a comma or quote.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
