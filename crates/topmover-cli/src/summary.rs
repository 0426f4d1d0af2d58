use std::fmt::{Display, Formatter};

use serde::Serialize;
use topmover_core::{ProviderId, Quote, TopMover, UtcDateTime};
use uuid::Uuid;

/// Run identifier (UUID v4) stamped on every summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RunId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Machine-readable record of one completed scan.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: RunId,
    pub generated_at: UtcDateTime,
    pub provider: ProviderId,
    /// Wall-clock duration of the whole pass, fetch through report write.
    pub elapsed_ms: u64,
    /// Every quote observed during the scan, in fetch order.
    pub quotes: Vec<Quote>,
    pub top_mover: TopMover,
    pub report_path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl RunSummary {
    pub fn new(
        provider: ProviderId,
        elapsed_ms: u64,
        quotes: Vec<Quote>,
        top_mover: TopMover,
        report_path: impl Into<String>,
    ) -> Self {
        Self {
            run_id: RunId::new_v4(),
            generated_at: UtcDateTime::now(),
            provider,
            elapsed_ms,
            quotes,
            top_mover,
            report_path: report_path.into(),
            warnings: Vec::new(),
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}
