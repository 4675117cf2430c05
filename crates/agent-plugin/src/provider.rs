//! Provider Capability
//!
//! Providers supply contextual data on demand, independent of the action
//! validation/dispatch cycle. The host may call `get` at any point while
//! composing context for the agent.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Data returned by a provider
///
/// There is deliberately no success flag: a provider that cannot produce
/// data returns the failure explanation as `text` with `data` unset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderResult {
    /// Text injected into the agent's context
    pub text: String,

    /// Structured data (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ProviderResult {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Provider trait - implement to supply on-demand context
#[async_trait]
pub trait Provider: Send + Sync {
    /// Unique provider identifier
    fn name(&self) -> &str;

    /// Produce contextual data for a message
    async fn get(&self, message: &Message) -> ProviderResult;
}
