//! Retry utilities for async operations
//!
//! Provides retry with exponential backoff. The default policy waits
//! `2^attempt * 100ms` between attempts and returns the last error verbatim
//! once the attempts run out.

use rand::Rng;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Configuration for retrying failed operations
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first)
    pub max_attempts: usize,

    /// Wait after the first failed attempt
    pub initial_interval: Duration,

    /// Multiplier for the interval after each retry
    pub backoff_factor: f64,

    /// Upper bound for a single wait
    pub max_interval: Duration,

    /// Whether to scale each wait by a random factor in `0.5..=1.5`
    pub jitter: bool,
}

impl RetryPolicy {
    /// Create a new retry policy with the given max attempts
    ///
    /// # Example
    ///
    /// ```rust
    /// use tooling::async_utils::retry::RetryPolicy;
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::new(3);
    /// assert_eq!(policy.max_attempts, 3);
    /// assert_eq!(policy.calculate_delay(1), Duration::from_millis(200));
    /// ```
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            initial_interval: Duration::from_millis(100),
            backoff_factor: 2.0,
            max_interval: Duration::from_secs(30),
            jitter: false,
        }
    }

    /// Set the wait after the first failed attempt
    pub fn with_initial_interval(mut self, interval: Duration) -> Self {
        self.initial_interval = interval;
        self
    }

    /// Set the backoff factor
    pub fn with_backoff_factor(mut self, factor: f64) -> Self {
        self.backoff_factor = factor;
        self
    }

    /// Set the maximum interval between retries
    pub fn with_max_interval(mut self, interval: Duration) -> Self {
        self.max_interval = interval;
        self
    }

    /// Enable or disable jitter
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Calculate the wait after a failed attempt (0-indexed)
    ///
    /// Uses exponential backoff: initial_interval * (backoff_factor ^ attempt),
    /// capped at max_interval, with optional jitter.
    pub fn calculate_delay(&self, attempt: usize) -> Duration {
        if attempt >= self.max_attempts {
            return Duration::ZERO;
        }

        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let base = self.initial_interval.as_nanos() as f64 * self.backoff_factor.powi(exponent);
        let capped = base.min(self.max_interval.as_nanos() as f64);

        let scaled = if self.jitter {
            capped * rand::thread_rng().gen_range(0.5..=1.5)
        } else {
            capped
        };

        // Float-to-int casts saturate, so an overflowing base still lands on a finite wait.
        Duration::from_nanos(scaled as u64)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Execute an async operation with retry logic
///
/// The operation is invoked up to `policy.max_attempts` times (at least once).
/// The first success short-circuits. After the last failed attempt the error
/// is returned as-is, without waiting.
///
/// # Example
///
/// ```rust,ignore
/// use tooling::async_utils::retry::{RetryPolicy, with_retry};
///
/// let policy = RetryPolicy::new(5).with_jitter(true);
/// let body = with_retry(&policy, || call_api()).await?;
/// ```
pub async fn with_retry<F, Fut, T, E>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        let error = match operation().await {
            Ok(result) => return Ok(result),
            Err(error) => error,
        };
        attempt += 1;

        if attempt >= max_attempts {
            tracing::debug!("Attempt {} failed: {}. Giving up", attempt, error);
            return Err(error);
        }

        let wait = policy.calculate_delay(attempt - 1);
        tracing::debug!("Attempt {} failed: {}. Retrying in {:?}", attempt, error, wait);
        super::delay(wait).await;
    }
}

/// Retry `operation` up to `max_retries` attempts in total
///
/// Waits 100ms, 200ms, 400ms, ... between attempts. Shorthand for
/// [`with_retry`] with [`RetryPolicy::new`].
pub async fn retry_with_backoff<F, Fut, T, E>(operation: F, max_retries: usize) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    with_retry(&RetryPolicy::new(max_retries), operation).await
}
