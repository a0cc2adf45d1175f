//! Tests for the retry policy.

use super::*;

#[test]
fn test_positive_retry_count_is_used() {
    for count in [1, 3, 10, 25, i32::MAX] {
        assert_eq!(RetryPolicy::new(count).max_retries(), count as u32);
    }
}

#[test]
fn test_zero_or_negative_retry_count_falls_back_to_default() {
    for count in [0, -1, i32::MIN] {
        assert_eq!(RetryPolicy::new(count).max_retries(), DEFAULT_MAX_RETRIES);
    }
    assert_eq!(RetryPolicy::default().max_retries(), 10);
}

#[test]
fn test_retry_config_counts_initial_attempt() {
    let config = RetryPolicy::new(4).to_retry_config();
    assert_eq!(config.max_attempts(), 5);

    let config = RetryPolicy::default().to_retry_config();
    assert_eq!(config.max_attempts(), DEFAULT_MAX_RETRIES + 1);
}

#[test]
fn test_retry_config_does_not_overflow() {
    let config = retry_config_for(u32::MAX);
    assert_eq!(config.max_attempts(), u32::MAX);
}
