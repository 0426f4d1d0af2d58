//! Retry policy for transient upstream failures.
//!
//! The upstream free tier answers bursts with 429s and the occasional 5xx,
//! so fetches run under a bounded retry budget instead of looping forever.

use std::time::Duration;

/// Backoff strategy between retry attempts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backoff {
    /// Fixed delay between retries.
    Fixed { delay: Duration },
    /// Exponential delay: `base * (factor ^ attempt)`, capped at `max`,
    /// with optional +/- 50% jitter.
    Exponential {
        base: Duration,
        factor: f64,
        max: Duration,
        jitter: bool,
    },
}

impl Backoff {
    /// Delay for a 0-based retry attempt.
    pub fn delay(self, attempt: u32) -> Duration {
        match self {
            Self::Fixed { delay } => delay,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let scale = factor.powi(attempt as i32);
                let seconds = base.as_secs_f64() * scale;
                let capped_seconds = seconds.min(max.as_secs_f64());

                let mut delay = Duration::from_secs_f64(capped_seconds);

                if jitter {
                    let jitter_ms = (delay.as_millis() as f64 * 0.5) as u64;
                    let random_offset = fastrand::u64(0..=(jitter_ms * 2));
                    let total_ms =
                        delay.as_millis() as i64 + (random_offset as i64 - jitter_ms as i64);
                    delay = Duration::from_millis(total_ms.max(0) as u64);
                }

                delay
            }
        }
    }
}

/// Bounded retry configuration for quote fetches.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries. Total attempts = `max_retries + 1`.
    pub max_retries: u32,
    /// Backoff strategy between attempts.
    pub backoff: Backoff,
    /// HTTP status codes treated as transient.
    pub retry_on_status: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::finnhub_default()
    }
}

impl RetryConfig {
    /// Policy used against the Finnhub free tier: fixed 1-second delay,
    /// five retries, standard transient status set.
    pub fn finnhub_default() -> Self {
        Self::fixed(Duration::from_secs(1), 5)
    }

    pub fn fixed(delay: Duration, max_retries: u32) -> Self {
        Self {
            max_retries,
            backoff: Backoff::Fixed { delay },
            retry_on_status: default_transient_statuses(),
        }
    }

    pub fn exponential(base: Duration, max: Duration, max_retries: u32) -> Self {
        Self {
            max_retries,
            backoff: Backoff::Exponential {
                base,
                factor: 2.0,
                max,
                jitter: true,
            },
            retry_on_status: default_transient_statuses(),
        }
    }

    /// Disable retries entirely.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            backoff: Backoff::Fixed {
                delay: Duration::ZERO,
            },
            retry_on_status: default_transient_statuses(),
        }
    }

    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_on_status.contains(&status)
    }

    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.backoff.delay(attempt)
    }
}

fn default_transient_statuses() -> Vec<u16> {
    vec![408, 429, 500, 502, 503, 504]
}
