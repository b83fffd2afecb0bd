//! Standalone utility functions and async control-flow examples
//!
//! Every function here is independent and stateless.
//!
//! # Modules
//!
//! - `basic` - Arithmetic and string utilities
//! - `fetch` - Simulated fetches run in parallel or in sequence
//! - `data_structures` - Stack, queue and list containers
//! - `concurrency` - Worker pool, pipeline, fan-out and rate-limited runs over channels
//! - `config` - Demo settings loaded from `SKILLS_*` environment variables
//!
//! The generic async helpers (delay, retry, timeout, race, batches) live in
//! [`tooling::async_utils`] and are re-exported here.

pub mod basic;
pub mod concurrency;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod fetch;

pub use config::SkillsConfig;
pub use error::{Result, SkillsError};
pub use fetch::{
    fetch_data, fetch_multiple, fetch_sequential, FetchRecord, Fetcher, SimulatedFetcher,
};
pub use tooling::async_utils::{
    delay, delay_ms, process_batches, race, retry_with_backoff, with_retry, with_timeout,
    RetryPolicy, TimeoutError,
};
