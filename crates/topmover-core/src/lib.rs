//! # Topmover Core
//!
//! Domain contracts and the Finnhub data path for the topmover scanner.
//!
//! ## Overview
//!
//! The crate provides everything the CLI needs to run one scan:
//!
//! - **Canonical domain models** for quotes and the selected top mover
//! - **Credential store** with env → cache-file → prompt resolution
//! - **HTTP client abstraction** with a reqwest production transport
//! - **Finnhub adapter** normalizing the upstream `/quote` payload
//! - **Bounded-retry fetcher** distinguishing transient from permanent
//!   failures
//! - **CSV report writer** for the fixed single-row output schema
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Finnhub) |
//! | [`credentials`] | API key cache and resolution |
//! | [`domain`] | Domain models (Quote, TopMover, Symbol) |
//! | [`error`] | Core error types |
//! | [`fetch`] | Bounded-retry quote fetching |
//! | [`http_client`] | HTTP client abstraction |
//! | [`mover`] | Most-volatile selection |
//! | [`report`] | CSV report output |
//! | [`retry`] | Retry/backoff policy |
//! | [`quote_source`] | Source trait and structured errors |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use topmover_core::{FinnhubAdapter, QuoteFetcher, RetryConfig, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = Arc::new(FinnhubAdapter::default());
//!     let fetcher = QuoteFetcher::new(adapter, RetryConfig::finnhub_default());
//!
//!     let symbol = Symbol::parse("AAPL")?;
//!     let outcome = fetcher.fetch(&symbol).await?;
//!     println!("AAPL moved {:.2}%", outcome.quote.percent_change);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Upstream failures are structured and classified:
//!
//! ```rust
//! use topmover_core::{SourceError, SourceErrorKind};
//!
//! fn handle_error(error: SourceError) {
//!     match error.kind() {
//!         SourceErrorKind::RateLimited | SourceErrorKind::Unavailable => {
//!             // Transient: the fetcher retries these on a fixed schedule
//!         }
//!         SourceErrorKind::Unauthorized => {
//!             // Permanent: re-enter the API key
//!         }
//!         _ => {}
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key is read from the environment or a local cache file and
//!   never logged
//! - The upstream-required User-Agent identifies this tool on every call

pub mod adapters;
pub mod credentials;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod http_client;
pub mod mover;
pub mod quote_source;
pub mod report;
pub mod retry;

// Re-export commonly used types at crate root for convenience

// Adapter implementations
pub use adapters::FinnhubAdapter;

// Credential store
pub use credentials::{ApiKeyStore, API_KEY_ENV, KEY_CACHE_FILE};

// Domain models
pub use domain::{Quote, Symbol, TopMover, UtcDateTime};

// Error types
pub use error::{CoreError, CredentialError, ReportError, ValidationError};

// Fetching
pub use fetch::{FetchOutcome, QuoteFetcher};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
    USER_AGENT,
};

// Selection and report output
pub use mover::{most_volatile, DEFAULT_SYMBOLS};
pub use report::{write_report, CSV_HEADER, REPORT_FILE};

// Retry policy
pub use retry::{Backoff, RetryConfig};

// Source contract
pub use quote_source::{ProviderId, QuoteSource, SourceError, SourceErrorKind};
