//! Incoming Messages
//!
//! The message shape the host hands to actions and providers. The host owns
//! conversation history, rooms and entities; capabilities only see one
//! message at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user message routed to a capability
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier assigned by the host
    pub id: Uuid,

    /// Text content
    pub text: String,

    /// Originating channel (e.g., "discord", "telegram")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Timestamp
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new message with a fresh id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            source: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the originating channel
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Case-insensitive substring check against the message text
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(&needle.to_lowercase())
    }
}
