//! Configuration builder trait

use crate::Result;

/// Trait for configuration structures that support validation, environment
/// loading and merging
pub trait ConfigBuilder: Default + Clone {
    /// Validate the configuration
    ///
    /// Returns an error if a value is out of range.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Load configuration from environment variables
    ///
    /// Variables follow the pattern `{PREFIX}{FIELD_NAME}`. Fields without a
    /// variable keep their default.
    fn from_env(prefix: &str) -> Result<Self>;

    /// Overlay `other` onto this configuration
    ///
    /// Fields of `other` that differ from the default win; the rest keep the
    /// value already in `self`.
    fn merge(&mut self, other: Self) -> &mut Self;

    /// Defaults, validated
    fn build() -> Result<Self> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Start from defaults, overlay the environment, then validate
    fn from_env_with_defaults(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.merge(Self::from_env(prefix)?);
        config.validate()?;
        Ok(config)
    }
}
