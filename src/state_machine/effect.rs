//! Effects produced by state transitions

use crate::conversation::ConversationId;
use crate::host::HostMessage;
use crate::model::ModelId;
use std::time::Duration;

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Post a fire-and-forget message to the host
    PostToHost(HostMessage),

    /// Switch the view to a conversation
    Navigate { conversation_id: ConversationId },

    /// Queue `Event::GraceElapsed` once after `delay`
    ScheduleGraceExpiry { delay: Duration },
}

impl Effect {
    #[must_use]
    pub fn set_model(conversation_id: ConversationId, model: ModelId) -> Self {
        Effect::PostToHost(HostMessage::SetModel {
            value: model,
            conversation_id,
        })
    }

    #[must_use]
    pub fn open_settings() -> Self {
        Effect::PostToHost(HostMessage::OpenSettings)
    }

    #[must_use]
    pub fn navigate(conversation_id: ConversationId) -> Self {
        Effect::Navigate { conversation_id }
    }
}
