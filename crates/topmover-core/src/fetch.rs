//! Bounded-retry quote fetching.
//!
//! Wraps a [`QuoteSource`] with the retry policy from [`crate::retry`]:
//! transient errors sleep out the backoff and try again up to the bound,
//! permanent errors short-circuit immediately. Retry noise is collected as
//! warnings so the CLI can surface it in the run summary.

use std::sync::Arc;

use crate::quote_source::{QuoteSource, SourceError};
use crate::retry::RetryConfig;
use crate::{Quote, Symbol};

/// Successful fetch plus the operational noise it took to get there.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub quote: Quote,
    /// Total attempts made, including the successful one.
    pub attempts: u32,
    pub warnings: Vec<String>,
}

/// Sequential quote fetcher with a bounded retry budget.
pub struct QuoteFetcher {
    source: Arc<dyn QuoteSource>,
    retry: RetryConfig,
}

impl QuoteFetcher {
    pub fn new(source: Arc<dyn QuoteSource>, retry: RetryConfig) -> Self {
        Self { source, retry }
    }

    /// Fetch one symbol, retrying transient failures on the configured
    /// schedule.
    ///
    /// # Errors
    ///
    /// Returns the first permanent [`SourceError`], or the last transient
    /// one once the retry budget is exhausted.
    pub async fn fetch(&self, symbol: &Symbol) -> Result<FetchOutcome, SourceError> {
        let mut warnings = Vec::new();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            match self.source.quote(symbol).await {
                Ok(quote) => {
                    return Ok(FetchOutcome {
                        quote,
                        attempts: attempt,
                        warnings,
                    });
                }
                Err(error) if error.retryable() && attempt <= self.retry.max_retries => {
                    let delay = self.retry.delay_for_attempt(attempt - 1);
                    warnings.push(format!(
                        "{symbol}: {error}; retrying in {:.1}s (attempt {}/{})",
                        delay.as_secs_f64(),
                        attempt + 1,
                        self.retry.max_retries + 1,
                    ));
                    tokio::time::sleep(delay).await;
                }
                Err(error) => return Err(error),
            }
        }
    }
}
