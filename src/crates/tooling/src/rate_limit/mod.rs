//! Rate limiting utilities
//!
//! Token bucket limiter for pacing operations. Time comes from the tokio
//! clock so limiters follow paused time in tests.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Token bucket rate limiter
///
/// Tokens are added at a constant rate up to `capacity`. The bucket starts
/// full.
///
/// # Example
///
/// ```rust,ignore
/// use tooling::rate_limit::RateLimiter;
/// use std::time::Duration;
///
/// // One operation every 500ms
/// let limiter = RateLimiter::new(1, Duration::from_millis(500));
/// for task in tasks {
///     limiter.acquire().await;
///     handle(task).await;
/// }
/// ```
#[derive(Clone)]
pub struct RateLimiter {
    state: Arc<Mutex<RateLimiterState>>,
}

struct RateLimiterState {
    /// Maximum number of tokens
    capacity: usize,

    /// Current number of tokens
    tokens: f64,

    /// Time to refill the bucket from empty
    refill_period: Duration,

    /// Last refill time
    last_refill: Instant,
}

impl RateLimiter {
    /// Create a limiter allowing `max_operations` per `period`
    ///
    /// A zero `max_operations` is treated as one.
    pub fn new(max_operations: usize, period: Duration) -> Self {
        let capacity = max_operations.max(1);
        Self {
            state: Arc::new(Mutex::new(RateLimiterState {
                capacity,
                tokens: capacity as f64,
                refill_period: period,
                last_refill: Instant::now(),
            })),
        }
    }

    /// Take a token if one is available (non-blocking)
    ///
    /// Returns `false` when rate limited.
    pub async fn check(&self) -> bool {
        let mut state = self.state.lock().await;
        state.refill();

        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Wait until a token is available and take it
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut state = self.state.lock().await;
                state.refill();
                if state.tokens >= 1.0 {
                    state.tokens -= 1.0;
                    return;
                }
                state.time_until_token()
            };

            tokio::time::sleep(wait).await;
        }
    }

    /// Number of operations that can be performed immediately
    pub async fn available(&self) -> usize {
        let mut state = self.state.lock().await;
        state.refill();
        state.tokens.floor() as usize
    }

    /// Refill the bucket completely
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.tokens = state.capacity as f64;
        state.last_refill = Instant::now();
    }
}

impl RateLimiterState {
    /// Refill tokens based on elapsed time
    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);

        if elapsed >= self.refill_period {
            self.tokens = self.capacity as f64;
        } else {
            let ratio = elapsed.as_secs_f64() / self.refill_period.as_secs_f64();
            self.tokens = (self.tokens + self.capacity as f64 * ratio).min(self.capacity as f64);
        }
        self.last_refill = now;
    }

    /// How long until the bucket holds one whole token
    fn time_until_token(&self) -> Duration {
        let missing = (1.0 - self.tokens).max(0.0);
        let per_token = self.refill_period.as_secs_f64() / self.capacity as f64;
        // Round up a hair so the next refill is guaranteed to cross 1.0.
        Duration::from_secs_f64(missing * per_token) + Duration::from_micros(1)
    }
}
