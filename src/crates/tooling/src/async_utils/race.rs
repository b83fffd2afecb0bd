//! First-to-settle races
//!
//! Every operation is spawned as its own task. The first output wins whether
//! it is a success or a failure; the rest are detached, not cancelled.

use super::detached::spawn_detached;
use futures::future::select_all;
use std::future::Future;

/// Return the output of whichever operation settles first
///
/// Returns `None` for an empty set of operations.
///
/// # Example
///
/// ```rust,ignore
/// use tooling::async_utils::{delay_ms, race};
///
/// let winner = race(vec![
///     Box::pin(async { delay_ms(50).await; "slow" }) as Pin<Box<dyn Future<Output = _> + Send>>,
///     Box::pin(async { delay_ms(10).await; "fast" }),
/// ])
/// .await;
/// assert_eq!(winner, Some("fast"));
/// ```
pub async fn race<I, F>(operations: I) -> Option<F::Output>
where
    I: IntoIterator<Item = F>,
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let tasks: Vec<_> = operations.into_iter().map(spawn_detached).collect();
    if tasks.is_empty() {
        return None;
    }

    let contenders = tasks.len();
    let (output, index, _losers) = select_all(tasks).await;
    tracing::debug!("Operation {} of {} settled first", index, contenders);

    Some(output)
}
