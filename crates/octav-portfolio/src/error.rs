//! Error Types for the Octav Plugin

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[derive(Error, Debug)]
pub enum PortfolioError {
    /// API key absent; checked per call, before any network I/O
    #[error("OCTAV_API_KEY is not configured")]
    MissingApiKey,

    /// Message text contained no wallet address
    #[error("No wallet address found in the message")]
    AddressNotFound,

    /// Octav returned a non-success HTTP status
    #[error("Portfolio request for {address} failed: {status}")]
    Upstream { address: String, status: String },

    /// Octav returned an empty portfolio array
    #[error("No portfolio data returned for {0}")]
    NoPortfolioData(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
