//! Detached tasks
//!
//! A [`Detached`] is the single-assignment handle for a spawned task. Awaiting
//! it yields the task's output; dropping it leaves the task running in the
//! background with its output discarded. Nothing in this crate aborts a task,
//! which is what lets races and timeouts abandon their losers.

use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use std::panic;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;

/// Handle to a task spawned with [`spawn_detached`]
///
/// Resolves to the task's output. A panic inside the task is resumed on the
/// awaiting side instead of being turned into an error value.
#[derive(Debug)]
pub struct Detached<T> {
    handle: JoinHandle<T>,
}

/// Spawn `future` onto the current runtime
///
/// # Panics
///
/// Panics when called outside of a tokio runtime.
pub fn spawn_detached<F>(future: F) -> Detached<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    Detached {
        handle: tokio::spawn(future),
    }
}

impl<T> Future for Detached<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Ready(Ok(output)) => Poll::Ready(output),
            Poll::Ready(Err(err)) if err.is_panic() => panic::resume_unwind(err.into_panic()),
            // Only reachable while the runtime itself is shutting down.
            Poll::Ready(Err(err)) => panic!("detached task did not complete: {}", err),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Await every task and collect the outputs in task order
///
/// Tasks are driven in completion order, so the first `Err` to arrive is
/// returned at once no matter where it sits in `tasks`. Tasks still pending at
/// that point are dropped, which leaves them running detached.
pub async fn try_join_detached<T, E>(
    tasks: Vec<Detached<Result<T, E>>>,
) -> Result<Vec<T>, E> {
    let total = tasks.len();
    let mut pending: FuturesUnordered<_> = tasks
        .into_iter()
        .enumerate()
        .map(|(index, task)| async move { (index, task.await) })
        .collect();

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();
    while let Some((index, output)) = pending.next().await {
        slots[index] = Some(output?);
    }
    Ok(slots.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_detached_yields_output() {
        let task = spawn_detached(async { 21 * 2 });
        assert_eq!(task.await, 42);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_keeps_running() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let task = spawn_detached(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });
        drop(task);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(finished.load(Ordering::SeqCst));
    }

    fn after(ms: u64, output: Result<u64, String>) -> Detached<Result<u64, String>> {
        spawn_detached(async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            output
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_join_keeps_task_order() {
        let tasks = vec![after(30, Ok(1)), after(10, Ok(2)), after(20, Ok(3))];
        assert_eq!(try_join_detached(tasks).await, Ok(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_try_join_empty() {
        let tasks: Vec<Detached<Result<u64, String>>> = Vec::new();
        assert_eq!(try_join_detached(tasks).await, Ok(Vec::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_join_fails_on_first_error_among_many() {
        let start = tokio::time::Instant::now();
        let mut tasks: Vec<_> = (0..40).map(|n| after(1000, Ok(n))).collect();
        tasks.push(after(10, Err("last task failed".to_string())));

        let result = try_join_detached(tasks).await;

        assert_eq!(result, Err("last task failed".to_string()));
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    #[should_panic(expected = "boom")]
    async fn test_panic_is_resumed() {
        let task = spawn_detached(async {
            panic!("boom");
        });
        task.await;
    }
}
