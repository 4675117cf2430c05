//! Get Portfolio Action
//!
//! Message-triggered capability: when a user asks for their portfolio, pull
//! the wallet address out of the text, fetch the snapshot and reply with the
//! formatted report.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use agent_plugin::{Action, ActionCallback, ActionExample, ActionResult, Message};

use crate::address::extract_address;
use crate::client::PortfolioSource;
use crate::error::PortfolioError;
use crate::format::format_portfolio;

/// Phrases that trigger the action (case-insensitive substring match)
pub const TRIGGER_PHRASES: &[&str] = &[
    "fetch portfolio",
    "get portfolio",
    "list portfolio balances",
    "portfolio",
    "display portfolio balances",
];

/// Action that answers portfolio queries
pub struct GetPortfolioAction {
    source: Arc<dyn PortfolioSource>,
}

impl GetPortfolioAction {
    pub fn new(source: Arc<dyn PortfolioSource>) -> Self {
        Self { source }
    }

    /// Run the extract → fetch → format pipeline for one message
    async fn build_report(&self, message: &Message) -> Result<String, PortfolioError> {
        let address = extract_address(&message.text).ok_or(PortfolioError::AddressNotFound)?;
        let balance = self.source.fetch_portfolio(&address).await?;
        Ok(format_portfolio(&balance))
    }
}

#[async_trait]
impl Action for GetPortfolioAction {
    fn name(&self) -> &str {
        "GET_PORTFOLIO"
    }

    fn description(&self) -> &str {
        "Fetch portfolio balances for a wallet address via the Octav API"
    }

    fn similes(&self) -> Vec<&str> {
        vec!["FETCH_PORTFOLIO", "SHOW_PORTFOLIO", "PORTFOLIO_BALANCES"]
    }

    fn examples(&self) -> Vec<ActionExample> {
        vec![
            ActionExample {
                user: "Can you fetch portfolio balances of \
                       0xEF7F2e81EA14538858d962df34eB1bFDa83da395"
                    .into(),
                reply: "Here is the portfolio summary for that wallet.".into(),
            },
            ActionExample {
                user: "display portfolio balances for my wallet \
                       0x1234567890abcdef1234567890abcdef12345678"
                    .into(),
                reply: "Fetching the latest balances from Octav now.".into(),
            },
        ]
    }

    fn validate(&self, message: &Message) -> bool {
        TRIGGER_PHRASES
            .iter()
            .any(|phrase| message.contains_ignore_case(phrase))
    }

    async fn handle(&self, message: &Message, callback: Option<&ActionCallback>) -> ActionResult {
        let report = match self.build_report(message).await {
            Ok(report) => report,
            Err(err) => {
                error!(action = self.name(), %err, "portfolio pipeline failed");
                return ActionResult::failure(err.to_string());
            }
        };

        if let Some(callback) = callback {
            if let Err(err) = callback(&report) {
                error!(action = self.name(), %err, "result callback failed");
                return ActionResult::failure(err.to_string());
            }
        }

        let data = serde_json::json!({ "report": report });
        ActionResult::success(report).with_data(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockPortfolioSource;
    use crate::model::{ChainBalance, PortfolioBalance, ProtocolBalance};
    use indexmap::IndexMap;

    const ADDRESS: &str = "0xEF7F2e81EA14538858d962df34eB1bFDa83da395";

    fn sample_balance() -> PortfolioBalance {
        let mut chains = IndexMap::new();
        chains.insert(
            "eth".to_string(),
            ChainBalance {
                name: "Ethereum".into(),
                key: "eth".into(),
                value: "500.5".into(),
                total_cost_basis: None,
                total_closed_pnl: None,
                total_open_pnl: None,
            },
        );

        let mut protocols = IndexMap::new();
        protocols.insert(
            "wallet".to_string(),
            ProtocolBalance {
                name: "Wallet".into(),
                key: "wallet".into(),
                value: "500.5".into(),
                total_cost_basis: None,
                total_closed_pnl: None,
                total_open_pnl: None,
                chains: IndexMap::new(),
            },
        );

        PortfolioBalance {
            address: ADDRESS.into(),
            networth: "500.5".into(),
            chains,
            asset_by_protocols: protocols,
        }
    }

    fn action_with(balance: PortfolioBalance) -> GetPortfolioAction {
        GetPortfolioAction::new(Arc::new(MockPortfolioSource::with_balance(balance)))
    }

    #[test]
    fn test_validate_matches_trigger_phrases() {
        let action = action_with(sample_balance());
        assert!(action.validate(&Message::new("please FETCH PORTFOLIO for me")));
        assert!(action.validate(&Message::new("get portfolio now")));
        assert!(action.validate(&Message::new("what does my Portfolio look like")));
        assert!(action.validate(&Message::new("Display Portfolio Balances")));
    }

    #[test]
    fn test_validate_rejects_unrelated_messages() {
        let action = action_with(sample_balance());
        assert!(!action.validate(&Message::new("what's the weather")));
        assert!(!action.validate(&Message::new("send 1 ETH to my wallet")));
    }

    #[tokio::test]
    async fn test_handle_end_to_end() {
        let action = action_with(sample_balance());
        let message = Message::new(format!("Can you fetch portfolio balances of {ADDRESS}"));

        let result = action.handle(&message, None).await;
        assert!(result.success);
        assert!(result.text.contains("Total Networth: $500.50"));
        assert!(result.text.contains("Ethereum: $500.50"));
        assert!(result.text.contains("Wallet: $500.50"));
        assert!(result.data.is_some());
    }

    #[tokio::test]
    async fn test_handle_without_address_fails() {
        let action = action_with(sample_balance());
        let message = Message::new("get portfolio");

        let result = action.handle(&message, None).await;
        assert!(!result.success);
        assert_eq!(result.text, PortfolioError::AddressNotFound.to_string());
    }

    #[tokio::test]
    async fn test_handle_invokes_callback_with_report_text() {
        use std::sync::Mutex;

        let action = action_with(sample_balance());
        let message = Message::new(format!("get portfolio {ADDRESS}"));

        let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        let seen_in_callback = Arc::clone(&seen);
        let callback: ActionCallback = Box::new(move |text| {
            *seen_in_callback.lock().unwrap() = Some(text.to_string());
            Ok(())
        });

        let result = action.handle(&message, Some(&callback)).await;
        assert!(result.success);
        assert_eq!(seen.lock().unwrap().as_deref(), Some(result.text.as_str()));
    }

    #[tokio::test]
    async fn test_callback_failure_becomes_failed_result() {
        let action = action_with(sample_balance());
        let message = Message::new(format!("get portfolio {ADDRESS}"));

        let callback: ActionCallback = Box::new(|_| Err(anyhow::anyhow!("channel closed")));
        let result = action.handle(&message, Some(&callback)).await;

        assert!(!result.success);
        assert!(result.error.as_deref().unwrap().contains("channel closed"));
    }

    #[tokio::test]
    async fn test_upstream_failure_surfaces_as_failure_text() {
        let action = GetPortfolioAction::new(Arc::new(MockPortfolioSource::empty()));
        let message = Message::new(format!("get portfolio {ADDRESS}"));

        let result = action.handle(&message, None).await;
        assert!(!result.success);
        assert!(result.text.contains(ADDRESS));
    }
}
