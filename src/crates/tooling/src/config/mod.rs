//! Configuration management utilities
//!
//! Settings are plain structs with defaults that can be overridden from
//! prefixed environment variables:
//!
//! - `ConfigBuilder` trait for validation, env loading and merging
//! - Environment variable helpers with typed parsing
//!
//! # Example
//!
//! ```rust,ignore
//! use tooling::config::{ConfigBuilder, get_env_parse_or};
//!
//! #[derive(Clone)]
//! struct DemoConfig {
//!     pub timeout_ms: u64,
//! }
//!
//! impl Default for DemoConfig {
//!     fn default() -> Self {
//!         Self { timeout_ms: 1000 }
//!     }
//! }
//!
//! impl ConfigBuilder for DemoConfig {
//!     fn from_env(prefix: &str) -> tooling::Result<Self> {
//!         Ok(Self {
//!             timeout_ms: get_env_parse_or(&format!("{}TIMEOUT_MS", prefix), 1000)?,
//!         })
//!     }
//!
//!     fn merge(&mut self, other: Self) -> &mut Self {
//!         self.timeout_ms = other.timeout_ms;
//!         self
//!     }
//! }
//!
//! let config = DemoConfig::from_env_with_defaults("DEMO_")?;
//! ```

mod builder;
mod env;

pub use builder::ConfigBuilder;
pub use env::{build_env_key, get_env, get_env_bool, get_env_parse, get_env_parse_or};
