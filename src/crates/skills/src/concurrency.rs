//! Channel-based concurrency patterns
//!
//! Worker pools, a three-stage pipeline, fan-out and a rate-limited runner,
//! all built from tokio tasks and `mpsc` channels.

use crate::error::{Result, SkillsError};
use std::future::Future;
use std::panic;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tooling::async_utils::delay;
use tooling::rate_limit::RateLimiter;

/// Time a [`worker_pool`] worker spends on one job
pub const JOB_DURATION: Duration = Duration::from_millis(100);

/// Time a [`fan_out`] worker spends on one input
pub const FAN_OUT_DURATION: Duration = Duration::from_millis(10);

fn square(n: i64) -> Result<i64> {
    n.checked_mul(n)
        .ok_or_else(|| SkillsError::invalid_input(format!("square of {} overflows i64", n)))
}

/// Wait for every task in `tasks`, resuming the first panic on this side
async fn join_all_tasks(mut tasks: JoinSet<()>) {
    while let Some(joined) = tasks.join_next().await {
        if let Err(err) = joined {
            if err.is_panic() {
                panic::resume_unwind(err.into_panic());
            }
        }
    }
}

/// Run `handler` over `jobs` on `workers` tasks sharing one job queue
///
/// Results arrive in completion order. The result channel closes once every
/// worker has dropped its sender, which is what ends the collection loop.
/// A worker that panics is resumed here after collection.
async fn run_pool<T, R, F, Fut>(workers: usize, jobs: Vec<T>, handler: F) -> Vec<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(usize, T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
{
    let workers = workers.max(1);
    let capacity = jobs.len().max(1);
    let (job_tx, job_rx) = mpsc::channel::<T>(capacity);
    let (result_tx, mut result_rx) = mpsc::channel::<R>(capacity);
    let job_rx = Arc::new(Mutex::new(job_rx));
    let handler = Arc::new(handler);
    let mut pool = JoinSet::new();

    for worker_id in 1..=workers {
        let job_rx = job_rx.clone();
        let result_tx = result_tx.clone();
        let handler = handler.clone();

        pool.spawn(async move {
            loop {
                let job = job_rx.lock().await.recv().await;
                let Some(job) = job else { break };

                let result = handler(worker_id, job).await;
                if result_tx.send(result).await.is_err() {
                    break;
                }
            }
            tracing::debug!("Worker {} finished", worker_id);
        });
    }
    drop(result_tx);

    for job in jobs {
        if job_tx.send(job).await.is_err() {
            break;
        }
    }
    drop(job_tx);

    let mut results = Vec::with_capacity(capacity);
    while let Some(result) = result_rx.recv().await {
        results.push(result);
    }
    join_all_tasks(pool).await;
    results
}

/// Double every job on a pool of `num_workers` workers
///
/// Each job takes [`JOB_DURATION`]. Results are in completion order, not job
/// order. Zero workers is treated as one. A job whose double overflows `i64`
/// fails the whole call with `InvalidInput`.
pub async fn worker_pool(num_workers: usize, jobs: Vec<i64>) -> Result<Vec<i64>> {
    run_pool(num_workers, jobs, |worker_id, job| async move {
        tracing::debug!("Worker {} processing job {}", worker_id, job);
        delay(JOB_DURATION).await;
        job.checked_mul(2)
            .ok_or_else(|| SkillsError::invalid_input(format!("double of {} overflows i64", job)))
    })
    .await
    .into_iter()
    .collect()
}

/// Square every input on `workers` concurrent workers
///
/// Results are in completion order.
pub async fn fan_out(input: Vec<i64>, workers: usize) -> Result<Vec<i64>> {
    run_pool(workers, input, |_, n| async move {
        delay(FAN_OUT_DURATION).await;
        square(n)
    })
    .await
    .into_iter()
    .collect()
}

/// Generate, square, then keep the even squares
///
/// Each stage is its own task connected by single-slot channels, so order is
/// preserved end to end. An overflowing square travels down the pipeline as
/// an error and ends the run.
pub async fn pipeline(numbers: Vec<i64>) -> Result<Vec<i64>> {
    let (gen_tx, mut gen_rx) = mpsc::channel::<i64>(1);
    let (square_tx, mut square_rx) = mpsc::channel::<Result<i64>>(1);
    let (even_tx, mut even_rx) = mpsc::channel::<Result<i64>>(1);
    let mut stages = JoinSet::new();

    stages.spawn(async move {
        for n in numbers {
            if gen_tx.send(n).await.is_err() {
                break;
            }
        }
    });

    stages.spawn(async move {
        while let Some(n) = gen_rx.recv().await {
            if square_tx.send(square(n)).await.is_err() {
                break;
            }
        }
    });

    stages.spawn(async move {
        while let Some(squared) = square_rx.recv().await {
            let keep = squared.as_ref().map_or(true, |n| n % 2 == 0);
            if keep && even_tx.send(squared).await.is_err() {
                break;
            }
        }
    });

    let mut results = Vec::new();
    let mut failure = None;
    while let Some(item) = even_rx.recv().await {
        match item {
            Ok(n) => results.push(n),
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }
    // Closing the last channel unblocks the upstream stages.
    drop(even_rx);
    join_all_tasks(stages).await;

    match failure {
        Some(err) => Err(err),
        None => Ok(results),
    }
}

/// Run `handler` over `tasks` one at a time, at most `per_second` per second
///
/// Outputs are returned in task order.
pub async fn run_rate_limited<T, R, F, Fut>(
    tasks: Vec<T>,
    per_second: u32,
    mut handler: F,
) -> Result<Vec<R>>
where
    F: FnMut(usize, T) -> Fut,
    Fut: Future<Output = R>,
{
    if per_second == 0 {
        return Err(SkillsError::invalid_input("rate must be at least one task per second"));
    }

    let limiter = RateLimiter::new(1, Duration::from_secs(1) / per_second);
    let mut results = Vec::with_capacity(tasks.len());

    for (index, task) in tasks.into_iter().enumerate() {
        limiter.acquire().await;
        tracing::debug!("Processing task {}", index);
        results.push(handler(index, task).await);
    }
    Ok(results)
}
