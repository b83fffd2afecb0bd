//! Simulated data fetching
//!
//! A [`Fetcher`] turns an identifier into a [`FetchRecord`]. The
//! [`SimulatedFetcher`] does no I/O: it waits a fixed latency and derives the
//! payload from the identifier.
//!
//! `fetch_multiple*` starts every fetch at once and keeps input order;
//! `fetch_sequential*` starts each fetch only after the previous one
//! resolved. Both stop at the first failure.

use crate::config::SkillsConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use tooling::async_utils::{delay, spawn_detached, try_join_detached};

/// Result of a fetch: the identifier and the data derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchRecord<I> {
    pub id: I,
    pub data: String,
}

impl<I: Display> FetchRecord<I> {
    /// Record for `id` with the payload `"Data for {id}"`
    pub fn for_id(id: I) -> Self {
        let data = format!("Data for {}", id);
        Self { id, data }
    }
}

/// Source of records keyed by identifier
#[async_trait]
pub trait Fetcher<I>: Send + Sync
where
    I: Send + 'static,
{
    type Error: Send + 'static;

    async fn fetch(&self, id: I) -> Result<FetchRecord<I>, Self::Error>;
}

/// Fetcher that sleeps for `latency` and never fails
#[derive(Debug, Clone)]
pub struct SimulatedFetcher {
    latency: Duration,
}

impl SimulatedFetcher {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_config(config: &SkillsConfig) -> Self {
        Self::new(config.fetch_latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedFetcher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

#[async_trait]
impl<I> Fetcher<I> for SimulatedFetcher
where
    I: Display + Send + 'static,
{
    type Error = Infallible;

    async fn fetch(&self, id: I) -> Result<FetchRecord<I>, Infallible> {
        delay(self.latency).await;
        Ok(FetchRecord::for_id(id))
    }
}

/// Fetch every id concurrently, results in input order
///
/// Each fetch runs as its own task. On the first failure the call returns
/// that error immediately; the other fetches keep running detached and their
/// results are dropped.
pub async fn fetch_multiple_with<F, I>(
    fetcher: Arc<F>,
    ids: Vec<I>,
) -> Result<Vec<FetchRecord<I>>, F::Error>
where
    F: Fetcher<I> + 'static,
    I: Send + 'static,
{
    let tasks: Vec<_> = ids
        .into_iter()
        .map(|id| {
            let fetcher = fetcher.clone();
            spawn_detached(async move { fetcher.fetch(id).await })
        })
        .collect();

    tracing::debug!("Started {} concurrent fetches", tasks.len());
    try_join_detached(tasks).await
}

/// Fetch ids one at a time, each after the previous one resolved
pub async fn fetch_sequential_with<F, I>(
    fetcher: &F,
    ids: Vec<I>,
) -> Result<Vec<FetchRecord<I>>, F::Error>
where
    F: Fetcher<I>,
    I: Send + 'static,
{
    let mut results = Vec::with_capacity(ids.len());
    for id in ids {
        results.push(fetcher.fetch(id).await?);
    }
    Ok(results)
}

/// Simulated fetch with the default 100ms latency
pub async fn fetch_data<I>(id: I) -> FetchRecord<I>
where
    I: Display + Send + 'static,
{
    match SimulatedFetcher::default().fetch(id).await {
        Ok(record) => record,
        Err(never) => match never {},
    }
}

/// Simulated fetches for every id, run concurrently
pub async fn fetch_multiple<I>(ids: Vec<I>) -> Vec<FetchRecord<I>>
where
    I: Display + Send + 'static,
{
    match fetch_multiple_with(Arc::new(SimulatedFetcher::default()), ids).await {
        Ok(records) => records,
        Err(never) => match never {},
    }
}

/// Simulated fetches for every id, run one after another
pub async fn fetch_sequential<I>(ids: Vec<I>) -> Vec<FetchRecord<I>>
where
    I: Display + Send + 'static,
{
    match fetch_sequential_with(&SimulatedFetcher::default(), ids).await {
        Ok(records) => records,
        Err(never) => match never {},
    }
}
