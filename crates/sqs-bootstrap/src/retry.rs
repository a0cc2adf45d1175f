//! Retry ceiling handed to the SDK request layer.
//!
//! Only the maximum number of retries is decided here. Backoff timing is
//! left to the SDK's standard retry strategy.

use aws_config::retry::RetryConfig;
use serde::{Deserialize, Serialize};

/// Retries used when no positive retry count is configured
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Retries used when credentials come from the hosting environment
pub const HOSTED_MAX_RETRIES: u32 = 3;

/// Standard SDK retry behavior with an overridden retry ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    retry_count: i32,
}

impl RetryPolicy {
    /// Create a policy from a configured retry count; zero or negative
    /// falls back to [`DEFAULT_MAX_RETRIES`]
    pub fn new(retry_count: i32) -> Self {
        Self { retry_count }
    }

    /// Total exponential backoff retries allowed
    pub fn max_retries(&self) -> u32 {
        u32::try_from(self.retry_count)
            .ok()
            .filter(|count| *count > 0)
            .unwrap_or(DEFAULT_MAX_RETRIES)
    }

    /// SDK retry configuration for this policy
    pub fn to_retry_config(&self) -> RetryConfig {
        retry_config_for(self.max_retries())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Standard retry config allowing `max_retries` retries.
///
/// The SDK counts the initial request as an attempt.
pub(crate) fn retry_config_for(max_retries: u32) -> RetryConfig {
    RetryConfig::standard().with_max_attempts(max_retries.saturating_add(1))
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
