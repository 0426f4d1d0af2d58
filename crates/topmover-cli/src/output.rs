use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::summary::RunSummary;

pub fn render(summary: &RunSummary, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(summary)?
            } else {
                serde_json::to_string(summary)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(summary),
    }

    Ok(())
}

fn render_table(summary: &RunSummary) {
    println!("run_id      : {}", summary.run_id);
    println!("generated_at: {}", summary.generated_at);
    println!("provider    : {}", summary.provider);
    println!("elapsed_ms  : {}", summary.elapsed_ms);

    println!("quotes:");
    for quote in &summary.quotes {
        println!(
            "  {:<6} {:>+8.2}%  now {:.2}  prev close {:.2}",
            quote.symbol, quote.percent_change, quote.current_price, quote.previous_close
        );
    }

    println!(
        "top mover   : {} moved {:.2}% (now {:.2}, prev close {:.2})",
        summary.top_mover.symbol,
        summary.top_mover.percent_change,
        summary.top_mover.current_price,
        summary.top_mover.previous_close
    );
    println!("report      : {}", summary.report_path);

    if !summary.warnings.is_empty() {
        println!("warnings:");
        for warning in &summary.warnings {
            println!("  - {warning}");
        }
    }
}
