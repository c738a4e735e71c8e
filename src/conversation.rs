//! Conversation records
//!
//! A conversation is a titled, append-only list of messages bound to one model.

use crate::model::ModelId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque conversation identifier, derived from title and creation instant
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    /// Build the identifier for a conversation created at `created_at`
    #[must_use]
    pub fn derive(title: &str, created_at: DateTime<Utc>) -> Self {
        Self(format!("{title}-{}", created_at.timestamp_millis()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConversationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ConversationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Preferred response length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Code,
    Concise,
    #[default]
    Normal,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// A single chat message. Content is never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// A conversation as observed by the panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub messages: Vec<Message>,
    /// Set by the completion backend while a response streams in
    pub in_progress: bool,
    pub created_at: DateTime<Utc>,
    pub model: ModelId,
    pub autoscroll: bool,
    pub verbosity: Verbosity,
}

impl Conversation {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        created_at: DateTime<Utc>,
        model: ModelId,
        verbosity: Verbosity,
    ) -> Self {
        let title = title.into();
        Self {
            id: ConversationId::derive(&title, created_at),
            title,
            messages: Vec::new(),
            in_progress: false,
            created_at,
            model,
            autoscroll: true,
            verbosity,
        }
    }

    /// True once any message exists; the bound model is frozen from then on
    #[must_use]
    pub fn has_history(&self) -> bool {
        !self.messages.is_empty()
    }
}
