//! Panel state types

use crate::availability::{AvailabilityGate, SplashView};
use crate::config::DEFAULT_AVAILABILITY_GRACE;
use crate::conversation::{Conversation, ConversationId};
use crate::host::HostSnapshot;
use crate::model::ModelMenu;
use crate::store::ConversationStore;
use std::time::Duration;

/// Everything the panel owns. Host state lives in [`HostSnapshot`] instead.
#[derive(Debug, Clone)]
pub struct PanelState {
    pub conversations: ConversationStore,
    pub gate: AvailabilityGate,
    pub menu: ModelMenu,
    /// Delay used when the splash schedules its grace timer
    pub availability_grace: Duration,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(DEFAULT_AVAILABILITY_GRACE)
    }
}

impl PanelState {
    #[must_use]
    pub fn new(availability_grace: Duration) -> Self {
        Self {
            conversations: ConversationStore::new(),
            gate: AvailabilityGate::new(),
            menu: ModelMenu::default(),
            availability_grace,
        }
    }

    #[must_use]
    pub fn conversation(&self, id: &ConversationId) -> Option<&Conversation> {
        self.conversations.get(id)
    }

    #[must_use]
    pub fn splash_view(&self, host: &HostSnapshot) -> SplashView {
        self.gate.view(&host.catalog, &host.settings)
    }

    /// Label for the model button of a conversation, `None` if it is unknown
    #[must_use]
    pub fn model_label(&self, id: &ConversationId, host: &HostSnapshot) -> Option<String> {
        self.conversation(id)
            .map(|c| ModelMenu::button_label(c, &host.settings))
    }
}
