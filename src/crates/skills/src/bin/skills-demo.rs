//! Demonstration run of every skill
//!
//! Prints human-readable results to stdout. Logging goes to stderr and is
//! controlled by `RUST_LOG` or `SKILLS_VERBOSE`.

use anyhow::Context;
use skills::basic::{
    all_positive, calculate_sum, contains, factorial, fibonacci, filter_even, find_max, greet,
    is_palindrome, reverse_string, string_lengths, unique_values,
};
use skills::concurrency::{fan_out, pipeline, run_rate_limited, worker_pool};
use skills::data_structures::{LinkedList, Queue, Stack};
use skills::fetch::{fetch_multiple_with, fetch_sequential_with, SimulatedFetcher};
use skills::{delay, process_batches, race, with_retry, with_timeout, RetryPolicy, SkillsConfig};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tooling::logging::{init_logging, timed_with_level, LogLevel};

type BoxedOp = Pin<Box<dyn Future<Output = Result<&'static str, String>> + Send>>;

/// Deadline for the timeout demo, always shorter than the 2s operation it guards
const DEMO_TIMEOUT: Duration = Duration::from_millis(1000);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SkillsConfig::load().context("Failed to load SKILLS_* configuration")?;
    init_logging(config.verbose);
    tracing::info!("Starting skills demo");
    tracing::debug!("Configuration: {:?}", config);

    run_basic_demo()?;
    run_data_structures_demo()?;
    run_async_demo(&config).await?;
    run_concurrency_demo().await?;

    tracing::info!("Skills demo finished");
    Ok(())
}

fn run_basic_demo() -> anyhow::Result<()> {
    println!("{}", greet("World"));
    println!("Sum: {}", calculate_sum(&[1, 2, 3, 4, 5])?);
    println!("Max: {}", find_max(&[1, 5, 3, 9, 2])?);
    println!("Reversed: {}", reverse_string("Hello"));
    println!("Is palindrome: {}", is_palindrome("racecar"));
    println!("Fibonacci: {:?}", fibonacci(10));
    println!("Factorial: {}", factorial(5)?);
    println!("Even numbers: {:?}", filter_even(&[1, 2, 3, 4, 5, 6]));
    println!("String lengths: {:?}", string_lengths(&["a", "ab", "abc"]));
    println!("All positive: {}", all_positive(&[1, 2, 3]));
    println!("Contains 3: {}", contains(&[1, 2, 3, 4], 3));
    println!("Unique: {:?}", unique_values(&[1, 2, 2, 3, 3, 4]));

    if let Err(e) = find_max(&[]) {
        println!("Max of empty slice: {}", e);
    }
    Ok(())
}

fn run_data_structures_demo() -> anyhow::Result<()> {
    println!("Testing Stack:");
    let mut stack = Stack::new();
    for n in [1, 2, 3] {
        stack.push(n);
    }
    println!("Stack size: {}", stack.size());
    println!("Pop: {}", stack.pop()?);
    println!("Peek: {}", stack.peek()?);

    println!("Testing Queue:");
    let mut queue = Queue::new();
    for n in [1, 2, 3] {
        queue.enqueue(n);
    }
    println!("Queue size: {}", queue.size());
    println!("Dequeue: {}", queue.dequeue()?);
    println!("Front: {}", queue.front()?);

    println!("Testing LinkedList:");
    let mut list = LinkedList::new();
    for n in [1, 2, 3] {
        list.append(n);
    }
    list.prepend(0);
    println!("List: {:?}", list.to_list());
    list.delete(&2);
    println!("After delete: {:?}", list.to_list());
    Ok(())
}

async fn run_async_demo(config: &SkillsConfig) -> anyhow::Result<()> {
    println!("Testing async operations...");
    let fetcher = Arc::new(SimulatedFetcher::from_config(config));

    let parallel = timed_with_level(
        "parallel fetch",
        LogLevel::Info,
        fetch_multiple_with(fetcher.clone(), vec![1, 2, 3]),
    )
    .await?;
    println!("Parallel fetch: {}", serde_json::to_string(&parallel)?);

    let sequential = timed_with_level(
        "sequential fetch",
        LogLevel::Info,
        fetch_sequential_with(fetcher.as_ref(), vec![4, 5]),
    )
    .await?;
    println!("Sequential fetch: {}", serde_json::to_string(&sequential)?);

    let policy = RetryPolicy::new(config.max_retries).with_initial_interval(config.backoff_base());
    let succeed_on = policy.max_attempts;
    let attempts = AtomicUsize::new(0);
    let retried = with_retry(&policy, || {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if attempt < succeed_on {
                Err(format!("transient failure on attempt {}", attempt))
            } else {
                Ok(attempt)
            }
        }
    })
    .await;
    match retried {
        Ok(attempt) => println!("Retry succeeded on attempt {}", attempt),
        Err(e) => println!("Retry gave up: {}", e),
    }

    let contenders: Vec<BoxedOp> = vec![
        Box::pin(async {
            delay(Duration::from_millis(300)).await;
            Ok::<_, String>("slow")
        }),
        Box::pin(async {
            delay(Duration::from_millis(50)).await;
            Ok::<_, String>("fast")
        }),
    ];
    if let Some(winner) = race(contenders).await {
        println!("Race winner: {:?}", winner);
    }

    let batches = process_batches(vec![1, 2, 3, 4, 5], config.batch_size, |n| async move {
        delay(Duration::from_millis(20)).await;
        Ok::<_, Infallible>(n * 10)
    })
    .await?;
    println!("Batches of {}: {:?}", config.batch_size, batches);

    match with_timeout(
        async {
            delay(Duration::from_millis(2000)).await;
            Ok::<_, Infallible>(())
        },
        DEMO_TIMEOUT,
    )
    .await
    {
        Ok(()) => println!("Finished before the timeout"),
        Err(e) => println!("Timeout caught: {}", e),
    }

    println!("All async tests complete!");
    Ok(())
}

async fn run_concurrency_demo() -> anyhow::Result<()> {
    println!("Concurrency examples");

    println!("Worker pool results: {:?}", worker_pool(3, (1..=10).collect()).await?);
    println!("Pipeline results: {:?}", pipeline(vec![1, 2, 3, 4, 5]).await?);
    println!("Fan-out results: {:?}", fan_out(vec![1, 2, 3, 4, 5], 2).await?);

    println!("Rate limiter example:");
    let tasks = vec!["task1", "task2", "task3", "task4", "task5"];
    run_rate_limited(tasks, 2, |index, task| async move {
        println!("Processing task {}: {}", index, task);
    })
    .await?;
    Ok(())
}
