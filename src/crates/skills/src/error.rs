use thiserror::Error;
use tooling::ToolingError;

/// Errors returned by the skill functions
#[derive(Debug, Error)]
pub enum SkillsError {
    /// Input outside the domain of the function (empty slice, negative number, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ToolingError),
}

impl SkillsError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        SkillsError::InvalidInput(message.into())
    }
}

/// Result type for skill functions
pub type Result<T> = std::result::Result<T, SkillsError>;
