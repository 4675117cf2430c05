//! Portfolio Provider
//!
//! On-demand counterpart to the action: the host can ask for a wallet's
//! portfolio as context without going through action dispatch. Failures are
//! reported as text; the result shape has no success flag.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use agent_plugin::{Message, Provider, ProviderResult};

use crate::address::extract_address;
use crate::client::PortfolioSource;
use crate::error::PortfolioError;
use crate::format::format_portfolio;

/// Provider that supplies a formatted portfolio report as context
pub struct PortfolioProvider {
    source: Arc<dyn PortfolioSource>,
}

impl PortfolioProvider {
    pub fn new(source: Arc<dyn PortfolioSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Provider for PortfolioProvider {
    fn name(&self) -> &str {
        "PORTFOLIO_PROVIDER"
    }

    async fn get(&self, message: &Message) -> ProviderResult {
        let Some(address) = extract_address(&message.text) else {
            return ProviderResult::text_only(PortfolioError::AddressNotFound.to_string());
        };

        match self.source.fetch_portfolio(&address).await {
            Ok(balance) => {
                let report = format_portfolio(&balance);
                let data = serde_json::to_value(&balance).unwrap_or_default();
                ProviderResult::text_only(report).with_data(data)
            }
            Err(err) => {
                warn!(provider = self.name(), %err, "portfolio fetch failed");
                ProviderResult::text_only(err.to_string())
            }
        }
    }
}
