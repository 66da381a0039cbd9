//! Retry policy for transient transport failures
//!
//! Retries happen inside [`SeamClient::make_request`](crate::SeamClient::make_request)
//! before any error is normalized. Only two kinds of failure qualify:
//!
//! - transport errors where no response arrived (connection refused, reset),
//!   for any HTTP method; timeouts are not retried
//! - 5xx responses to idempotent methods (GET, HEAD, OPTIONS, PUT, DELETE)
//!
//! 4xx responses are application errors and are returned immediately.

use std::time::Duration;

use reqwest::{Method, StatusCode};

/// Default number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 2;
/// Default base delay for exponential back-off
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(100);
/// Default upper bound for a single back-off delay
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(5);

/// Exponential back-off configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries after the first attempt (0 disables retrying)
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

impl RetryConfig {
    /// A policy that never retries
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Delay before retry number `retry` (1-based): `base_delay * 2^retry`,
    /// capped at `max_delay`
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(retry))
            .min(self.max_delay)
    }

    /// Whether a transport error (no response received) is worth retrying
    pub fn is_retryable_error(&self, err: &reqwest::Error) -> bool {
        !err.is_timeout() && (err.is_connect() || err.is_request())
    }

    /// Whether a response status is worth retrying for this method
    pub fn is_retryable_status(&self, method: &Method, status: StatusCode) -> bool {
        status.is_server_error() && is_idempotent(method)
    }
}

/// Methods that may be repeated without changing the outcome
pub fn is_idempotent(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::PUT | Method::DELETE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.base_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_exponential_delay() {
        let config = RetryConfig::default();
        assert_eq!(config.delay_for(1), Duration::from_millis(200));
        assert_eq!(config.delay_for(2), Duration::from_millis(400));
        assert_eq!(config.delay_for(3), Duration::from_millis(800));
    }

    #[test]
    fn test_delay_is_capped() {
        let config = RetryConfig::default();
        assert_eq!(config.delay_for(30), DEFAULT_MAX_DELAY);
    }

    #[test]
    fn test_retryable_status() {
        let config = RetryConfig::default();
        assert!(config.is_retryable_status(&Method::GET, StatusCode::INTERNAL_SERVER_ERROR));
        assert!(config.is_retryable_status(&Method::DELETE, StatusCode::BAD_GATEWAY));
        assert!(!config.is_retryable_status(&Method::POST, StatusCode::SERVICE_UNAVAILABLE));
        assert!(!config.is_retryable_status(&Method::GET, StatusCode::BAD_REQUEST));
        assert!(!config.is_retryable_status(&Method::GET, StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_disabled() {
        assert_eq!(RetryConfig::disabled().max_retries, 0);
    }
}
