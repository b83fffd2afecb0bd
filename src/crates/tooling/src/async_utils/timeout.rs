//! Best-effort timeouts for async operations
//!
//! The operation is spawned as a detached task and raced against a timer.
//! When the timer wins the caller gets [`TimeoutError::Elapsed`] right away,
//! but the operation is not cancelled: it keeps running and its eventual
//! result is dropped.

use super::detached::spawn_detached;
use std::future::Future;
use std::time::Duration;

/// Execute an async operation with a deadline
///
/// # Arguments
///
/// * `operation` - Async operation to execute
/// * `duration` - How long to wait for it
///
/// # Returns
///
/// The operation's value, its own error wrapped in [`TimeoutError::Failed`],
/// or [`TimeoutError::Elapsed`] if the deadline passed first.
///
/// # Example
///
/// ```rust,ignore
/// use tooling::async_utils::{delay_ms, with_timeout, TimeoutError};
/// use std::time::Duration;
///
/// let result = with_timeout(
///     async {
///         delay_ms(2000).await;
///         Ok::<_, String>("done")
///     },
///     Duration::from_secs(1),
/// )
/// .await;
///
/// assert!(matches!(result, Err(TimeoutError::Elapsed(_))));
/// ```
pub async fn with_timeout<F, T, E>(operation: F, duration: Duration) -> Result<T, TimeoutError<E>>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let task = spawn_detached(operation);

    // On elapse the timer drops `task`, which only detaches it.
    match tokio::time::timeout(duration, task).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(error)) => Err(TimeoutError::Failed(error)),
        Err(_elapsed) => {
            tracing::debug!("Operation abandoned after {:?}", duration);
            Err(TimeoutError::Elapsed(duration))
        }
    }
}

/// Error type for timeout operations
#[derive(Debug, PartialEq, Eq)]
pub enum TimeoutError<E> {
    /// Operation completed but failed
    Failed(E),
    /// The deadline passed before the operation settled
    Elapsed(Duration),
}

impl<E> TimeoutError<E> {
    /// Whether the deadline was hit
    pub fn is_elapsed(&self) -> bool {
        matches!(self, TimeoutError::Elapsed(_))
    }

    /// The operation's own error, if it failed before the deadline
    pub fn into_inner(self) -> Option<E> {
        match self {
            TimeoutError::Failed(e) => Some(e),
            TimeoutError::Elapsed(_) => None,
        }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TimeoutError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeoutError::Failed(e) => write!(f, "Operation failed: {}", e),
            TimeoutError::Elapsed(d) => write!(f, "Timeout after {:?}", d),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for TimeoutError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TimeoutError::Failed(e) => Some(e),
            TimeoutError::Elapsed(_) => None,
        }
    }
}
