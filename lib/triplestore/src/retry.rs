use serde::Deserialize;
use std::time::Duration;

/// How often a remote call is attempted and how long to wait in between.
///
/// Only transport failures (connection errors, timeouts) and the statuses
/// listed by [`RetryPolicy::is_retryable_status`] are retried.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub base_backoff_ms: u64,
}

pub trait BackoffPolicy {
    fn delay_for_attempt(&self, attempt: usize) -> Duration;
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_backoff_ms: 200,
        }
    }
}

impl RetryPolicy {
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            base_backoff_ms: 0,
        }
    }

    pub fn attempts(&self) -> usize {
        self.max_attempts.max(1)
    }

    pub fn is_retryable_status(&self, status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }
}

impl BackoffPolicy for RetryPolicy {
    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        Duration::from_millis(self.base_backoff_ms.saturating_mul(attempt as u64))
    }
}
