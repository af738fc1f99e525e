// Opt-in retry with exponential backoff for idempotent requests
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    /// A single attempt, no backoff. This is what the dashboard does by default.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Wait before retry number `attempt + 1`, capped at `max_delay_ms`
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = self.backoff_multiplier.powi(attempt as i32);
        let ms = (self.initial_delay_ms as f64 * factor).min(self.max_delay_ms as f64);
        Duration::from_millis(ms as u64)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            initial_delay_ms: 500,
            max_delay_ms: 8000,
            backoff_multiplier: 2.0,
        }
    }
}

/// Run `operation` until it succeeds, fails with an error `is_retryable`
/// rejects, or `max_retries` extra attempts have been spent.
pub async fn with_retry<F, Fut, T, E, R>(
    config: &RetryConfig,
    is_retryable: R,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    R: Fn(&E) -> bool,
{
    let mut attempt = 0;
    loop {
        let err = match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!("Recovered on attempt {}", attempt + 1);
                }
                return Ok(value);
            }
            Err(err) => err,
        };

        if attempt >= config.max_retries || !is_retryable(&err) {
            if attempt > 0 {
                warn!("Giving up after {} attempts: {}", attempt + 1, err);
            }
            return Err(err);
        }

        let delay = config.backoff(attempt);
        warn!(
            "Attempt {} of {} failed: {}. Next try in {:?}",
            attempt + 1,
            config.max_retries + 1,
            err,
            delay
        );
        sleep(delay).await;
        attempt += 1;
    }
}

/// 5xx, 408 and 429 are worth another try; everything else is final
pub fn is_retryable_status(status: reqwest::StatusCode) -> bool {
    status.is_server_error()
        || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        || status == reqwest::StatusCode::REQUEST_TIMEOUT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(max_retries: u32) -> RetryConfig {
        RetryConfig {
            max_retries,
            initial_delay_ms: 5,
            max_delay_ms: 20,
            backoff_multiplier: 2.0,
        }
    }

    #[tokio::test]
    async fn test_disabled_makes_exactly_one_attempt() {
        let call_count = AtomicU32::new(0);

        let result = with_retry(&RetryConfig::disabled(), |_: &&str| true, || async {
            call_count.fetch_add(1, Ordering::SeqCst);
            Err::<i32, _>("boom")
        })
        .await;

        assert_eq!(result, Err("boom"));
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_succeeds_after_failures() {
        let call_count = AtomicU32::new(0);

        let result = with_retry(&fast(3), |_: &&str| true, || async {
            let count = call_count.fetch_add(1, Ordering::SeqCst) + 1;
            if count < 3 {
                Err("temporary failure")
            } else {
                Ok(42)
            }
        })
        .await;

        assert_eq!(result, Ok(42));
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_budget() {
        let call_count = AtomicU32::new(0);

        let result = with_retry(&fast(2), |_: &&str| true, || async {
            call_count.fetch_add(1, Ordering::SeqCst);
            Err::<i32, _>("permanent failure")
        })
        .await;

        assert_eq!(result, Err("permanent failure"));
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_error_stops_immediately() {
        let call_count = AtomicU32::new(0);

        let result = with_retry(&fast(5), |e: &&str| *e != "not found", || async {
            call_count.fetch_add(1, Ordering::SeqCst);
            Err::<i32, _>("not found")
        })
        .await;

        assert_eq!(result, Err("not found"));
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let config = fast(4);
        assert_eq!(config.backoff(0), Duration::from_millis(5));
        assert_eq!(config.backoff(1), Duration::from_millis(10));
        assert_eq!(config.backoff(2), Duration::from_millis(20));
        assert_eq!(config.backoff(3), Duration::from_millis(20));
    }

    #[test]
    fn test_retryable_status_codes() {
        assert!(is_retryable_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable_status(reqwest::StatusCode::TOO_MANY_REQUESTS));

        assert!(!is_retryable_status(reqwest::StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(reqwest::StatusCode::BAD_REQUEST));
    }
}
