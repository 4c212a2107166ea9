//! Linear backoff between synthesis attempts.

use crate::Error;
use std::time::Duration;

/// What the synthesis loop does after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Retry { delay: Duration },
    Fail,
}

/// Retry budget for one synthesis call.
///
/// Attempts are numbered from 1. After a retryable failure on attempt `n`
/// the loop sleeps `base_delay * n` and tries again, until `max_attempts`
/// calls have been made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::from_secs(1),
        }
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }

    pub fn decide(&self, attempt: u32, error: &Error) -> Decision {
        if !error.is_retryable() || attempt >= self.max_attempts {
            return Decision::Fail;
        }
        Decision::Retry {
            delay: self.backoff(attempt),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3)
    }
}
