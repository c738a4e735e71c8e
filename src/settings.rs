//! Host-owned extension settings
//!
//! The panel only ever reads a snapshot of these; the host pushes a fresh
//! snapshot whenever the user edits their configuration.

use crate::conversation::Verbosity;
use crate::model::ModelId;
use serde::{Deserialize, Serialize};

/// Completion settings nested under `gpt3` on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelId>,
}

/// Snapshot of the extension settings relevant to the panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpt3: Option<CompletionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<Verbosity>,
    #[serde(default, rename = "minimalUI")]
    pub minimal_ui: bool,
    #[serde(default)]
    pub disable_multiple_conversations: bool,
}

impl Settings {
    /// Model configured as the default for new conversations, if any
    #[must_use]
    pub fn default_model(&self) -> Option<&ModelId> {
        self.gpt3.as_ref().and_then(|c| c.model.as_ref())
    }

    #[must_use]
    pub fn default_verbosity(&self) -> Option<Verbosity> {
        self.verbosity
    }

    #[must_use]
    pub fn with_default_model(mut self, model: ModelId) -> Self {
        self.gpt3.get_or_insert_with(CompletionSettings::default).model = Some(model);
        self
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = Some(verbosity);
        self
    }

    #[must_use]
    pub fn with_minimal_ui(mut self, minimal_ui: bool) -> Self {
        self.minimal_ui = minimal_ui;
        self
    }

    #[must_use]
    pub fn with_single_conversation(mut self, disable_multiple: bool) -> Self {
        self.disable_multiple_conversations = disable_multiple;
        self
    }
}
