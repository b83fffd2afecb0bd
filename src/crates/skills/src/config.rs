//! Demo settings
//!
//! Every field can be overridden with a `SKILLS_`-prefixed environment
//! variable, e.g. `SKILLS_FETCH_LATENCY_MS=250`.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tooling::config::{build_env_key, get_env_bool, get_env_parse_or, ConfigBuilder};
use tooling::ToolingError;

/// Environment variable prefix for [`SkillsConfig`]
pub const ENV_PREFIX: &str = "SKILLS_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Simulated latency of a single fetch
    pub fetch_latency_ms: u64,
    /// Attempts made by the retry demo
    pub max_retries: usize,
    /// Wait after the first failed attempt; doubles on each retry
    pub backoff_base_ms: u64,
    pub batch_size: usize,
    pub verbose: bool,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            fetch_latency_ms: 100,
            max_retries: 3,
            backoff_base_ms: 100,
            batch_size: 2,
            verbose: false,
        }
    }
}

impl SkillsConfig {
    /// Load from `SKILLS_*` variables on top of the defaults
    pub fn load() -> tooling::Result<Self> {
        Self::from_env_with_defaults(ENV_PREFIX)
    }

    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.fetch_latency_ms)
    }

    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }
}

impl ConfigBuilder for SkillsConfig {
    fn validate(&self) -> tooling::Result<()> {
        if self.max_retries == 0 {
            return Err(ToolingError::Config("max_retries must be at least 1".into()));
        }
        if self.batch_size == 0 {
            return Err(ToolingError::Config("batch_size must be at least 1".into()));
        }
        Ok(())
    }

    fn from_env(prefix: &str) -> tooling::Result<Self> {
        let defaults = Self::default();
        let key = |name: &str| build_env_key(prefix, name);

        Ok(Self {
            fetch_latency_ms: get_env_parse_or(
                &key("fetch_latency_ms"),
                defaults.fetch_latency_ms,
            )?,
            max_retries: get_env_parse_or(&key("max_retries"), defaults.max_retries)?,
            backoff_base_ms: get_env_parse_or(&key("backoff_base_ms"), defaults.backoff_base_ms)?,
            batch_size: get_env_parse_or(&key("batch_size"), defaults.batch_size)?,
            verbose: get_env_bool(&key("verbose"))?.unwrap_or(defaults.verbose),
        })
    }

    fn merge(&mut self, other: Self) -> &mut Self {
        *self = other;
        self
    }
}
