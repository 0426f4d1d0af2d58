use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use topmover_core::{
    most_volatile, write_report, ApiKeyStore, FinnhubAdapter, QuoteFetcher, QuoteSource,
    ReqwestHttpClient, RetryConfig, Symbol, DEFAULT_SYMBOLS,
};

use crate::commands::key::prompt_for_key;
use crate::error::CliError;
use crate::summary::RunSummary;

/// Run one full pass: resolve the credential, fetch the tracked symbols
/// sequentially, select the top mover, and write the CSV report.
pub async fn run(
    store: &ApiKeyStore,
    report_path: &Path,
    timeout_ms: u64,
    mock: bool,
) -> Result<RunSummary, CliError> {
    let started = Instant::now();

    let adapter: Arc<dyn QuoteSource> = if mock {
        Arc::new(FinnhubAdapter::default())
    } else {
        let key = store.resolve_with(prompt_for_key)?;
        Arc::new(
            FinnhubAdapter::with_http_client(Arc::new(ReqwestHttpClient::new()), key)
                .with_timeout_ms(timeout_ms),
        )
    };
    let provider = adapter.id();
    let fetcher = QuoteFetcher::new(adapter, RetryConfig::finnhub_default());

    // Sequential on purpose: the upstream free tier is rate-limited.
    let mut quotes = Vec::with_capacity(DEFAULT_SYMBOLS.len());
    let mut warnings = Vec::new();
    for raw in DEFAULT_SYMBOLS {
        let symbol = Symbol::parse(raw)?;
        let outcome = fetcher.fetch(&symbol).await?;
        warnings.extend(outcome.warnings);
        quotes.push(outcome.quote);
    }

    let top_mover = most_volatile(&quotes)
        .ok_or_else(|| CliError::Command(String::from("scan produced no quotes")))?;

    write_report(report_path, &top_mover)?;

    let elapsed_ms = started.elapsed().as_millis() as u64;
    let mut summary = RunSummary::new(
        provider,
        elapsed_ms,
        quotes,
        top_mover,
        report_path.display().to_string(),
    );
    for warning in warnings {
        summary.push_warning(warning);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use topmover_core::{ProviderId, REPORT_FILE};

    #[tokio::test]
    async fn mock_scan_completes_without_credentials() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ApiKeyStore::new(dir.path().join("finnhub_key.txt"));
        let report = dir.path().join(REPORT_FILE);

        let summary = run(&store, &report, 1_000, true)
            .await
            .expect("mock scan succeeds");

        assert_eq!(summary.provider, ProviderId::Finnhub);
        assert_eq!(summary.quotes.len(), DEFAULT_SYMBOLS.len());
        assert!(report.exists());

        let contents = std::fs::read_to_string(&report).expect("report is readable");
        assert_eq!(contents.lines().count(), 2);
    }
}
