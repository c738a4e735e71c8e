//! Messages exchanged with the extension host
//!
//! Outbound messages are fire-and-forget; inbound updates replace the panel's
//! read-only snapshot of host state.

use crate::conversation::ConversationId;
use crate::model::{ModelCatalog, ModelId};
use crate::settings::Settings;
use serde::{Deserialize, Serialize};

/// Message posted to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostMessage {
    /// Ask the host to open its configuration surface
    OpenSettings,
    /// Inform the host that a conversation was asked to use a model
    SetModel {
        value: ModelId,
        #[serde(rename = "conversationId")]
        conversation_id: ConversationId,
    },
}

/// State pushed by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum HostUpdate {
    SettingsUpdate(Settings),
    ModelsUpdate(ModelCatalog),
}

/// Latest host-owned state, read-only to the panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSnapshot {
    pub settings: Settings,
    pub catalog: ModelCatalog,
}

impl HostSnapshot {
    #[must_use]
    pub fn new(settings: Settings, catalog: ModelCatalog) -> Self {
        Self { settings, catalog }
    }

    /// Replace the affected half of the snapshot
    pub fn apply(&mut self, update: HostUpdate) {
        match update {
            HostUpdate::SettingsUpdate(settings) => self.settings = settings,
            HostUpdate::ModelsUpdate(catalog) => self.catalog = catalog,
        }
    }
}
