//! Error Types

use thiserror::Error;

/// Result type alias for plugin operations
pub type Result<T> = std::result::Result<T, PluginError>;

/// Plugin error types
#[derive(Error, Debug)]
pub enum PluginError {
    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Message did not contain what the capability needs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upstream service returned a failure
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Post-processing callback failed
    #[error("Callback error: {0}")]
    Callback(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl PluginError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            PluginError::Config(msg) => format!("The plugin is not configured correctly: {}", msg),
            PluginError::Validation(msg) => format!("Invalid request: {}", msg),
            PluginError::Upstream(msg) => format!("The upstream service failed: {}", msg),
            PluginError::Callback(_) => "A post-processing step failed.".into(),
            _ => "An unexpected error occurred.".into(),
        }
    }
}

impl From<anyhow::Error> for PluginError {
    fn from(err: anyhow::Error) -> Self {
        PluginError::Other(err.to_string())
    }
}
