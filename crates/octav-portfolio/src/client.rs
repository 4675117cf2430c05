//! Octav API Client
//!
//! One authenticated GET per fetch, no caching, no retries. The
//! `PortfolioSource` trait is the seam between the capability wrappers and
//! the wire: the real client talks to Octav, the mock serves canned
//! snapshots for tests and demos.

use async_trait::async_trait;

use crate::error::{PortfolioError, Result};
use crate::model::PortfolioBalance;

/// Default Octav API base URL
pub const DEFAULT_BASE_URL: &str = "https://backend-dev-api.octav.fi";

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "OCTAV_API_KEY";

/// Octav client configuration
///
/// The key is optional here: its absence is surfaced per call as
/// [`PortfolioError::MissingApiKey`], never at construction time.
#[derive(Clone, Debug)]
pub struct OctavConfig {
    /// API base URL
    pub base_url: String,

    /// Bearer token for the Octav API
    pub api_key: Option<String>,
}

impl Default for OctavConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: None,
        }
    }
}

impl OctavConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: Some(api_key.into()),
        }
    }

    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty());
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Portfolio source trait
///
/// Implement this for each backend that can resolve a wallet address to a
/// portfolio snapshot.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// Fetch the portfolio snapshot for one address
    async fn fetch_portfolio(&self, address: &str) -> Result<PortfolioBalance>;

    /// Source name
    fn name(&self) -> &str;
}

/// HTTP client for the Octav portfolio endpoint
pub struct OctavClient {
    http: reqwest::Client,
    config: OctavConfig,
}

impl OctavClient {
    /// Create from configuration
    pub fn from_config(config: OctavConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_config(OctavConfig::from_env())
    }
}

#[async_trait]
impl PortfolioSource for OctavClient {
    async fn fetch_portfolio(&self, address: &str) -> Result<PortfolioBalance> {
        // Key check comes first so a misconfigured deployment never emits
        // network traffic.
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(PortfolioError::MissingApiKey)?;

        let url = format!("{}/v1/portfolio", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("addresses", address)])
            .bearer_auth(api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Upstream {
                address: address.to_string(),
                status: status.to_string(),
            });
        }

        let mut balances: Vec<PortfolioBalance> = response.json().await?;
        if balances.is_empty() {
            return Err(PortfolioError::NoPortfolioData(address.to_string()));
        }
        Ok(balances.remove(0))
    }

    fn name(&self) -> &str {
        "Octav"
    }
}

/// Canned portfolio source for tests and demos
#[derive(Clone, Debug, Default)]
pub struct MockPortfolioSource {
    balance: Option<PortfolioBalance>,
}

impl MockPortfolioSource {
    /// Serve this snapshot for every address
    pub fn with_balance(balance: PortfolioBalance) -> Self {
        Self {
            balance: Some(balance),
        }
    }

    /// Serve no data, as if Octav returned an empty array
    pub fn empty() -> Self {
        Self { balance: None }
    }
}

#[async_trait]
impl PortfolioSource for MockPortfolioSource {
    async fn fetch_portfolio(&self, address: &str) -> Result<PortfolioBalance> {
        self.balance
            .clone()
            .ok_or_else(|| PortfolioError::NoPortfolioData(address.to_string()))
    }

    fn name(&self) -> &str {
        "MockPortfolio"
    }
}
