//! Runtime for driving the panel
//!
//! Owns the panel state and the latest host snapshot, feeds inputs through the
//! state machine one at a time and carries out the resulting effects.

mod executor;
pub mod traits;


pub use executor::PanelRuntime;
pub use traits::{ChannelHost, HostChannel, HostError};

use crate::availability::SplashView;
use crate::conversation::ConversationId;
use crate::host::HostUpdate;
use crate::state_machine::Event;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc};

/// Anything the runtime consumes from its input queue
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInput {
    /// User or timer event for the state machine
    Event(Event),
    /// Settings or catalog pushed by the host
    Host(HostUpdate),
}

impl From<Event> for PanelInput {
    fn from(event: Event) -> Self {
        PanelInput::Event(event)
    }
}

impl From<HostUpdate> for PanelInput {
    fn from(update: HostUpdate) -> Self {
        PanelInput::Host(update)
    }
}

/// Notifications for the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    Navigate { conversation_id: ConversationId },
    SplashChanged { view: SplashView },
    Error { message: String },
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Panel runtime has stopped")]
    Stopped,
}

/// Handle to interact with a running panel
#[derive(Debug, Clone)]
pub struct PanelHandle {
    input_tx: mpsc::Sender<PanelInput>,
    ui_tx: broadcast::Sender<UiEvent>,
}

impl PanelHandle {
    pub(crate) fn new(
        input_tx: mpsc::Sender<PanelInput>,
        ui_tx: broadcast::Sender<UiEvent>,
    ) -> Self {
        Self { input_tx, ui_tx }
    }

    /// Queue an input for the runtime.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Stopped`] once the runtime task has exited.
    pub async fn send(&self, input: impl Into<PanelInput>) -> Result<(), RuntimeError> {
        self.input_tx
            .send(input.into())
            .await
            .map_err(|_| RuntimeError::Stopped)
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.ui_tx.subscribe()
    }
}
