//! State transition function
//!
//! Every transition runs to completion before the next event is handled, so
//! a model request always sees the store as of its dispatch.

use super::policy::{plan_assignment, Assignment};
use super::{Effect, Event, PanelState};
use crate::conversation::{ConversationId, Message};
use crate::defaults::{resolve_model, resolve_verbosity};
use crate::host::HostSnapshot;
use crate::model::ModelId;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TransitionResult {
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during a transition. Conversations are untouched on
/// error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Conversation not found: {0}")]
    UnknownConversation(ConversationId),
}

/// Apply `event` to `state`, reading host-owned state from `host`
///
/// # Errors
///
/// Returns [`TransitionError::UnknownConversation`] when a `SetModel` or
/// `AppendMessage` names a conversation that is not in the store.
pub fn transition(
    state: &mut PanelState,
    host: &HostSnapshot,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match event {
        // ============================================================
        // Conversation lifecycle
        // ============================================================
        Event::NewConversation { from } => Ok(new_conversation(state, host, from.as_ref())),

        Event::RemoveConversation { id } => {
            state.conversations.remove_conversation(&id);
            Ok(TransitionResult::new())
        }

        Event::AppendMessage {
            conversation_id,
            message,
        } => append_message(state, &conversation_id, message),

        // ============================================================
        // Model selection
        // ============================================================
        Event::SetModel {
            conversation_id,
            model,
        } => set_model(state, host, conversation_id, model),

        Event::ToggleModelMenu => {
            state.menu.toggle();
            Ok(TransitionResult::new())
        }

        Event::CloseModelMenu => {
            state.menu.close();
            Ok(TransitionResult::new())
        }

        // ============================================================
        // Availability splash
        // ============================================================
        Event::ActivateSplash => {
            if state.gate.activate() {
                Ok(TransitionResult::new().with_effect(Effect::ScheduleGraceExpiry {
                    delay: state.availability_grace,
                }))
            } else {
                tracing::debug!("Splash already activated, grace timer not rescheduled");
                Ok(TransitionResult::new())
            }
        }

        Event::GraceElapsed(_) => {
            if state.gate.fire() {
                tracing::info!(
                    models = host.catalog.len(),
                    "Model availability grace period elapsed"
                );
            } else {
                tracing::debug!(phase = ?state.gate.phase(), "Grace completion ignored");
            }
            Ok(TransitionResult::new())
        }

        Event::OpenSettings => Ok(TransitionResult::new().with_effect(Effect::open_settings())),
    }
}

/// Create a conversation seeded from `from` and switch to it
fn new_conversation(
    state: &mut PanelState,
    host: &HostSnapshot,
    from: Option<&ConversationId>,
) -> TransitionResult {
    let source = from.and_then(|id| state.conversations.get(id));
    if source.is_none() {
        if let Some(id) = from {
            tracing::debug!(conversation_id = %id, "Source conversation gone, using settings defaults");
        }
    }
    let model = resolve_model(&host.settings, source);
    let verbosity = resolve_verbosity(&host.settings, source);

    let created = state
        .conversations
        .create_conversation(model, verbosity, &host.settings);
    TransitionResult::new().with_effect(Effect::navigate(created.id))
}

fn append_message(
    state: &mut PanelState,
    conversation_id: &ConversationId,
    message: Message,
) -> Result<TransitionResult, TransitionError> {
    if state.conversations.append_message(conversation_id, message) {
        Ok(TransitionResult::new())
    } else {
        Err(TransitionError::UnknownConversation(conversation_id.clone()))
    }
}

/// Bind `model` to a conversation, forking when its history freezes the model
fn set_model(
    state: &mut PanelState,
    host: &HostSnapshot,
    conversation_id: ConversationId,
    model: ModelId,
) -> Result<TransitionResult, TransitionError> {
    let Some(conversation) = state.conversations.get(&conversation_id) else {
        state.menu.close();
        return Err(TransitionError::UnknownConversation(conversation_id));
    };
    let plan = plan_assignment(conversation, &model, &host.settings);

    let mut result =
        TransitionResult::new().with_effect(Effect::set_model(conversation_id.clone(), model));

    match plan {
        Assignment::Unchanged => {
            tracing::debug!(conversation_id = %conversation_id, "Model already bound");
        }
        Assignment::InPlace { model } => {
            state
                .conversations
                .update_conversation_model(&conversation_id, model);
        }
        Assignment::Fork { model, verbosity } => {
            let forked = state
                .conversations
                .create_conversation(model, verbosity, &host.settings);
            tracing::info!(
                conversation_id = %conversation_id,
                forked_id = %forked.id,
                model = %forked.model,
                "Model change forked a new conversation"
            );
            result = result.with_effect(Effect::navigate(forked.id));
        }
    }

    state.menu.close();
    Ok(result)
}
