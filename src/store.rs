//! Ordered store of live conversations
//!
//! Owns the conversation list. Titles are unique among live conversations and
//! ids are never reused for the lifetime of the store.

use crate::conversation::{Conversation, ConversationId, Message, Verbosity};
use crate::model::ModelId;
use crate::settings::Settings;
use crate::title::allocate_title;
use chrono::{DateTime, TimeZone, Utc};

/// Conversations in creation order
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    /// Last creation millisecond handed out; ids embed it, so it must advance
    last_created_ms: Option<i64>,
}

impl ConversationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation and append it to the list.
    ///
    /// When the settings disable multiple conversations, every other
    /// conversation is removed afterwards.
    pub fn create_conversation(
        &mut self,
        model: ModelId,
        verbosity: Verbosity,
        settings: &Settings,
    ) -> Conversation {
        let title = allocate_title(self.titles());
        let created_at = self.next_creation_instant(Utc::now());
        let conversation = Conversation::new(title, created_at, model, verbosity);

        tracing::info!(
            conversation_id = %conversation.id,
            model = %conversation.model,
            "Conversation created"
        );
        self.conversations.push(conversation.clone());

        if settings.disable_multiple_conversations {
            let stale: Vec<ConversationId> = self
                .conversations
                .iter()
                .filter(|c| c.id != conversation.id)
                .map(|c| c.id.clone())
                .collect();
            for id in stale {
                self.remove_conversation(&id);
            }
        }

        conversation
    }

    /// Remove a conversation. Returns false (and does nothing) if it is absent.
    pub fn remove_conversation(&mut self, id: &ConversationId) -> bool {
        let before = self.conversations.len();
        self.conversations.retain(|c| &c.id != id);
        let removed = self.conversations.len() < before;
        if removed {
            tracing::info!(conversation_id = %id, "Conversation removed");
        } else {
            tracing::debug!(conversation_id = %id, "Remove ignored, conversation not found");
        }
        removed
    }

    /// Rebind a conversation's model in place.
    ///
    /// Does not check for history; callers must only use this on
    /// conversations without messages.
    pub fn update_conversation_model(&mut self, id: &ConversationId, model: ModelId) -> bool {
        match self.get_mut(id) {
            Some(conversation) => {
                tracing::info!(
                    conversation_id = %id,
                    from = %conversation.model,
                    to = %model,
                    "Conversation model updated"
                );
                conversation.model = model;
                true
            }
            None => false,
        }
    }

    /// Append a message produced by the chat backend
    pub fn append_message(&mut self, id: &ConversationId, message: Message) -> bool {
        match self.get_mut(id) {
            Some(conversation) => {
                conversation.messages.push(message);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, id: &ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| &c.id == id)
    }

    fn get_mut(&mut self, id: &ConversationId) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| &c.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ConversationId) -> bool {
        self.get(id).is_some()
    }

    /// All live conversations, oldest first
    #[must_use]
    pub fn list(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.conversations.iter().map(|c| c.title.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Creation instants are whole milliseconds and advance by at least one
    /// per conversation, so `title-millis` ids stay unique even when a title
    /// is freed and reallocated within the same millisecond.
    fn next_creation_instant(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        let now_ms = now.timestamp_millis();
        let ms = match self.last_created_ms {
            Some(last) => now_ms.max(last + 1),
            None => now_ms,
        };
        self.last_created_ms = Some(ms);
        Utc.timestamp_millis_opt(ms).single().unwrap_or(now)
    }
}
