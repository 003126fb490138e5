//! Error types for bid step calculation

use thiserror::Error;

/// Result type alias using our BidStepsError
pub type Result<T> = std::result::Result<T, BidStepsError>;

/// Main error type for bid step operations
#[derive(Error, Debug)]
pub enum BidStepsError {
    /// Settings are structurally valid JSON but unusable (e.g. no segments)
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// JSON serialization/deserialization errors
    #[error("malformed config: {0}")]
    MalformedConfig(#[from] serde_json::Error),

    /// Application configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BidStepsError {
    pub(crate) fn empty_segments() -> Self {
        BidStepsError::InvalidSettings("segments are empty".to_string())
    }

    /// Returns true for the "invalid settings" kind
    pub fn is_invalid_settings(&self) -> bool {
        matches!(self, BidStepsError::InvalidSettings(_))
    }
}

impl From<::config::ConfigError> for BidStepsError {
    fn from(err: ::config::ConfigError) -> Self {
        BidStepsError::Configuration(err.to_string())
    }
}
