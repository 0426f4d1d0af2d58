//! Quote source contract and structured upstream errors.
//!
//! The tool has exactly one endpoint to speak (a point-in-time quote per
//! symbol), so the adapter contract is a single-method trait rather than a
//! full capability matrix. Errors carry the transient-vs-permanent split
//! the retry layer keys on.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::{Quote, Symbol};

/// Canonical provider identifiers used in run summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Finnhub,
}

impl ProviderId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finnhub => "finnhub",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure or upstream 5xx; worth retrying.
    Unavailable,
    /// Free-tier quota exhausted; worth retrying after a delay.
    RateLimited,
    /// The API key was rejected; retrying cannot help.
    Unauthorized,
    /// The request itself is wrong (unknown symbol, bad parameters).
    InvalidRequest,
    /// Response arrived but could not be understood.
    Internal,
}

/// Structured source error consumed by the bounded-retry fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unauthorized,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::RateLimited => "source.rate_limited",
            SourceErrorKind::Unauthorized => "source.unauthorized",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Source adapter contract.
///
/// Implementations must be `Send + Sync`; the fetcher holds them behind an
/// `Arc<dyn QuoteSource>`.
pub trait QuoteSource: Send + Sync {
    /// Unique provider identifier, recorded in run summaries.
    fn id(&self) -> ProviderId;

    /// Fetch the latest quote for one symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] with `retryable() == true` for transport
    /// failures, rate limiting, and upstream 5xx; `false` for rejected
    /// keys, bad requests, and unparseable responses.
    fn quote<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Quote, SourceError>> + Send + 'a>>;
}
