//! Model assignment policy
//!
//! A conversation's model is frozen once it has messages. Asking for another
//! model after that point forks a new conversation instead of rewriting the
//! existing one.

use crate::conversation::{Conversation, Verbosity};
use crate::defaults::resolve_verbosity;
use crate::model::ModelId;
use crate::settings::Settings;

/// What a model request does to the conversation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// The conversation already uses the model
    Unchanged,
    /// No history yet: rebind the model on the conversation itself
    InPlace { model: ModelId },
    /// History exists: start a new conversation with these defaults
    Fork { model: ModelId, verbosity: Verbosity },
}

/// Decide how to apply `requested` to `conversation`
#[must_use]
pub fn plan_assignment(
    conversation: &Conversation,
    requested: &ModelId,
    settings: &Settings,
) -> Assignment {
    if &conversation.model == requested {
        Assignment::Unchanged
    } else if conversation.has_history() {
        Assignment::Fork {
            // An explicit request outranks every default tier
            model: requested.clone(),
            verbosity: resolve_verbosity(settings, Some(conversation)),
        }
    } else {
        Assignment::InPlace {
            model: requested.clone(),
        }
    }
}
