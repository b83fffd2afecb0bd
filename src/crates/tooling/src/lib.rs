//! Tooling utilities for the skills workspace
//!
//! This crate holds the generic pieces that the skill functions are built on.
//!
//! # Modules
//!
//! - `async_utils` - Delay, detached tasks, retry, timeout, race and batch helpers
//! - `config` - Configuration management with environment variable loading
//! - `logging` - Subscriber setup and timing helpers built on `tracing`
//! - `rate_limit` - Token bucket rate limiter driven by the tokio clock

pub mod async_utils;
pub mod config;
pub mod logging;
pub mod rate_limit;

use thiserror::Error;

/// Errors that can occur in the tooling crate
#[derive(Debug, Error)]
pub enum ToolingError {
    /// General error with message
    #[error("Tooling error: {0}")]
    General(String),

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for tooling operations
pub type Result<T> = std::result::Result<T, ToolingError>;
