//! Retry budget and randomized backoff for page fetches.

use std::ops::RangeInclusive;
use std::time::Duration;

use bundesliga_core::Error;
use rand::Rng;

/// How many attempts a fetch gets and how long to wait between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (default: 3)
    pub max_attempts: u32,
    /// Backoff range in milliseconds after a failed attempt (default: 1-3s)
    pub retry_delay_ms: RangeInclusive<u64>,
    /// Backoff range in milliseconds after an HTTP 429 (default: 5-10s)
    pub rate_limit_delay_ms: RangeInclusive<u64>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3, retry_delay_ms: 1_000..=3_000, rate_limit_delay_ms: 5_000..=10_000 }
    }
}

impl RetryPolicy {
    /// Whether a failed attempt numbered `attempt` (1-based) leaves room for another.
    pub fn should_retry(&self, attempt: u32, err: &Error) -> bool {
        attempt < self.max_attempts && err.is_retryable()
    }

    /// Pick a random backoff for the error that ended an attempt.
    ///
    /// Rate limiting waits in the longer range; everything else in the
    /// shorter one.
    pub fn delay_for<R: Rng + ?Sized>(&self, err: &Error, rng: &mut R) -> Duration {
        let range = match err {
            Error::RateLimited(_) => &self.rate_limit_delay_ms,
            _ => &self.retry_delay_ms,
        };
        Duration::from_millis(rng.gen_range(range.clone()))
    }
}
