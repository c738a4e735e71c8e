//! Events that drive the panel

use crate::conversation::{ConversationId, Message};
use crate::model::ModelId;

/// Completion of the grace timer. Only the runtime's timer task can build
/// one, so the gate cannot be resolved from outside the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraceTimer(());

impl GraceTimer {
    pub(crate) fn fired() -> Self {
        Self(())
    }
}

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Conversation events
    /// Start a new chat. `from` is the conversation being viewed, if any;
    /// its model and verbosity seed the defaults.
    NewConversation { from: Option<ConversationId> },
    RemoveConversation { id: ConversationId },
    /// Message produced by the chat backend
    AppendMessage {
        conversation_id: ConversationId,
        message: Message,
    },

    // Model selection events
    SetModel {
        conversation_id: ConversationId,
        model: ModelId,
    },
    ToggleModelMenu,
    /// An informational menu entry was followed
    CloseModelMenu,

    // Splash events
    ActivateSplash,
    /// The grace timer scheduled by `ActivateSplash` fired
    GraceElapsed(GraceTimer),
    /// The user asked to fix their configuration from the warning screen
    OpenSettings,
}
