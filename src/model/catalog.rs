//! Host-supplied catalog of available models and the selection menu built on it

use super::{all_models, ModelId};
use crate::conversation::Conversation;
use crate::settings::Settings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Label shown on the model button before any model is known
const UNKNOWN_MODEL_LABEL: &str = "...";

/// Set of model ids the host has confirmed as usable.
///
/// Populated asynchronously; stays empty when no valid credential is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelCatalog {
    models: BTreeSet<ModelId>,
}

impl ModelCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, model: &ModelId) -> bool {
        self.models.contains(model)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Available model ids, sorted
    #[must_use]
    pub fn available_models(&self) -> Vec<ModelId> {
        self.models.iter().cloned().collect()
    }

    /// Entries for the model selection menu, in definition order
    #[must_use]
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        all_models()
            .iter()
            .filter_map(|def| {
                let model = def.model_id();
                if self.contains(&model) {
                    Some(MenuEntry::Select {
                        model,
                        label: def.label,
                    })
                } else {
                    match (def.unavailable_hint, def.unavailable_url) {
                        (Some(hint), Some(url)) => Some(MenuEntry::Unavailable { model, hint, url }),
                        _ => None,
                    }
                }
            })
            .collect()
    }
}

impl<M: Into<ModelId>> FromIterator<M> for ModelCatalog {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self {
            models: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// One row of the model selection menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Selecting this entry requests the model for the current conversation
    Select { model: ModelId, label: &'static str },
    /// Informational link; activating it only closes the menu
    Unavailable {
        model: ModelId,
        hint: &'static str,
        url: &'static str,
    },
}

/// Open/closed state of the model selection menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelMenu {
    open: bool,
}

impl ModelMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Text for the button that opens the menu.
    ///
    /// A conversation with history shows its frozen model; otherwise the
    /// configured default is shown, since that is what a send would use.
    #[must_use]
    pub fn button_label(conversation: &Conversation, settings: &Settings) -> String {
        if conversation.has_history() {
            conversation.model.to_string()
        } else {
            settings
                .default_model()
                .map_or_else(|| UNKNOWN_MODEL_LABEL.to_string(), ToString::to_string)
        }
    }
}
