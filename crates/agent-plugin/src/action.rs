//! Action Capability
//!
//! Actions are invoked when a user message matches their validation
//! predicate. The host calls `validate` first and only dispatches `handle`
//! when it returns true.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Result from action execution
///
/// Errors never cross the action boundary: a failed pipeline becomes a
/// result with `success: false` and the error text in `text`/`error`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether execution succeeded
    pub success: bool,

    /// User-facing text (report on success, error message on failure)
    pub text: String,

    /// Underlying error message (failure only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Structured data (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ActionResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
            error: None,
            data: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            success: false,
            text: error.clone(),
            error: Some(error),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Example transcript advertised to the host for capability discovery
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionExample {
    /// What the user says
    pub user: String,

    /// How the agent replies
    pub reply: String,
}

/// Optional post-processing hook invoked with the result text
///
/// A failing callback turns an otherwise successful handle into a failed
/// `ActionResult` carrying the callback's error.
pub type ActionCallback = Box<dyn Fn(&str) -> anyhow::Result<()> + Send + Sync>;

/// Action trait - implement to add a message-triggered capability
#[async_trait]
pub trait Action: Send + Sync {
    /// Unique action identifier
    fn name(&self) -> &str;

    /// Human-readable description (shown to the host's planner)
    fn description(&self) -> &str;

    /// Alternative names the host may match on
    fn similes(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Example transcripts for discovery
    fn examples(&self) -> Vec<ActionExample> {
        Vec::new()
    }

    /// Whether this action should handle the message
    fn validate(&self, message: &Message) -> bool;

    /// Execute the action for a validated message
    async fn handle(&self, message: &Message, callback: Option<&ActionCallback>) -> ActionResult;
}
