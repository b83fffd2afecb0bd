//! Batch processing
//!
//! Items are split into contiguous batches. Within a batch every item runs
//! concurrently; batches themselves run strictly one after another, which
//! bounds how much work is in flight at once.

use super::detached::{spawn_detached, try_join_detached};
use std::future::Future;

/// Process `items` in batches of `batch_size`
///
/// Results come back in item order. The first failure aborts the whole call:
/// still-pending items of the failing batch are left running detached and
/// later batches are never started. A `batch_size` of zero is treated as one.
///
/// # Example
///
/// ```rust,ignore
/// use tooling::async_utils::process_batches;
///
/// let doubled = process_batches(vec![1, 2, 3, 4, 5], 2, |n| async move {
///     Ok::<_, String>(n * 2)
/// })
/// .await?;
/// assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
/// ```
pub async fn process_batches<T, F, Fut, R, E>(
    items: Vec<T>,
    batch_size: usize,
    processor: F,
) -> Result<Vec<R>, E>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    let batch_size = batch_size.max(1);
    let total = items.len();
    let mut results = Vec::with_capacity(total);
    let mut remaining = items.into_iter().peekable();
    let mut batch_index = 0;

    while remaining.peek().is_some() {
        let tasks: Vec<_> = remaining
            .by_ref()
            .take(batch_size)
            .map(|item| spawn_detached(processor(item)))
            .collect();

        tracing::debug!("Processing batch {} ({} items)", batch_index, tasks.len());
        results.extend(try_join_detached(tasks).await?);
        batch_index += 1;
    }

    tracing::debug!("Processed {} items in {} batches", total, batch_index);
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::async_utils::delay_ms;
    use std::convert::Infallible;
    use std::sync::{Arc, Mutex};
    use tokio::time::{Duration, Instant};

    #[tokio::test]
    async fn test_identity_preserves_order() {
        let items = vec![1, 2, 3, 4, 5];
        let result = process_batches(items, 2, |n| async move { Ok::<_, Infallible>(n) }).await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_batches_run_sequentially_in_chunks() {
        let seen: Arc<Mutex<Vec<(u32, Instant)>>> = Arc::new(Mutex::new(Vec::new()));
        let start = Instant::now();

        let result = process_batches(vec![1u32, 2, 3, 4, 5], 2, |n| {
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push((n, Instant::now()));
                delay_ms(100).await;
                Ok::<_, Infallible>(n * 10)
            }
        })
        .await
        .unwrap();

        assert_eq!(result, vec![10, 20, 30, 40, 50]);
        // Three batches of 100ms each: [2, 2, 1].
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert!(start.elapsed() < Duration::from_millis(400));

        let seen = seen.lock().unwrap();
        let started_at = |item: u32| {
            seen.iter()
                .find(|(n, _)| *n == item)
                .map(|(_, at)| at.duration_since(start))
                .unwrap()
        };
        assert!(started_at(1) < Duration::from_millis(100));
        assert!(started_at(2) < Duration::from_millis(100));
        assert!(started_at(3) >= Duration::from_millis(100));
        assert!(started_at(4) >= Duration::from_millis(100));
        assert!(started_at(5) >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_aborts_remaining_batches() {
        let started = Arc::new(Mutex::new(Vec::new()));

        let result = process_batches(vec![1, 2, 3, 4], 2, |n| {
            let started = started.clone();
            async move {
                started.lock().unwrap().push(n);
                delay_ms(10).await;
                if n == 2 {
                    Err(format!("item {} failed", n))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap_err(), "item 2 failed");
        delay_ms(100).await;
        let mut started = started.lock().unwrap().clone();
        started.sort();
        assert_eq!(started, vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_large_batch_fails_fast() {
        let start = Instant::now();
        let items: Vec<u32> = (0..40).collect();

        let result = process_batches(items, 40, |n| async move {
            if n == 39 {
                delay_ms(10).await;
                Err("item 39 failed")
            } else {
                delay_ms(1000).await;
                Ok(n)
            }
        })
        .await;

        assert_eq!(result, Err("item 39 failed"));
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_zero_batch_size_treated_as_one() {
        let result =
            process_batches(vec!["a", "b"], 0, |s| async move { Ok::<_, Infallible>(s.len()) })
                .await;
        assert_eq!(result.unwrap(), vec![1, 1]);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let result =
            process_batches(Vec::<u8>::new(), 3, |n| async move { Ok::<_, Infallible>(n) }).await;
        assert!(result.unwrap().is_empty());
    }
}
