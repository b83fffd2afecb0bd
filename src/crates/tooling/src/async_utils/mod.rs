//! Async utilities for common async patterns
//!
//! This module provides utilities for working with async operations:
//! - A `delay` primitive every other helper sleeps through
//! - Detached tasks that keep running after their result is abandoned
//! - Retry with exponential backoff
//! - Best-effort timeouts and races (losers are never cancelled)
//! - Sequential batches processed concurrently within each batch
//!
//! # Example
//!
//! ```rust,ignore
//! use tooling::async_utils::{delay_ms, retry_with_backoff, with_timeout, TimeoutError};
//! use std::time::Duration;
//!
//! // Retry with 100ms, 200ms, ... between attempts
//! async fn call_api_with_retry() -> Result<String, String> {
//!     retry_with_backoff(|| async { Ok("success".to_string()) }, 3).await
//! }
//!
//! // Give up waiting after a second; the sleep itself keeps running
//! async fn call_with_timeout() {
//!     let result = with_timeout(
//!         async {
//!             delay_ms(2000).await;
//!             Ok::<_, String>(())
//!         },
//!         Duration::from_secs(1),
//!     )
//!     .await;
//!     assert!(matches!(result, Err(TimeoutError::Elapsed(_))));
//! }
//! ```

pub mod batch;
pub mod detached;
pub mod race;
pub mod retry;
pub mod timeout;

use std::time::Duration;

pub use batch::process_batches;
pub use detached::{spawn_detached, try_join_detached, Detached};
pub use race::race;
pub use retry::{retry_with_backoff, with_retry, RetryPolicy};
pub use timeout::{with_timeout, TimeoutError};

/// Resolve after at least `duration` has elapsed
///
/// Never fails. Runs on the tokio clock, so paused test time advances it.
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Resolve after at least `ms` milliseconds
pub async fn delay_ms(ms: u64) {
    delay(Duration::from_millis(ms)).await;
}
