//! Conversation and model-assignment state for an editor chat panel
//!
//! The panel keeps an ordered list of conversations, binds each to a model,
//! forks a fresh conversation when the model of one with history is changed,
//! and gates its introduction splash on a model-availability grace period.
//! All mutations go through [`state_machine::transition`]; [`runtime`] drives
//! it from an event queue and talks to the host.

pub mod availability;
pub mod config;
pub mod conversation;
pub mod defaults;
pub mod host;
pub mod model;
pub mod runtime;
pub mod settings;
pub mod state_machine;
pub mod store;
pub mod telemetry;
pub mod title;

pub use availability::{AvailabilityGate, SplashView};
pub use config::{ConfigError, PanelConfig};
pub use conversation::{Conversation, ConversationId, Message, MessageRole, Verbosity};
pub use host::{HostMessage, HostSnapshot, HostUpdate};
pub use model::{ModelCatalog, ModelId};
pub use runtime::{PanelHandle, PanelInput, PanelRuntime, UiEvent};
pub use settings::Settings;
pub use state_machine::{transition, Event, PanelState, TransitionError};
pub use store::ConversationStore;
