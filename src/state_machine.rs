//! Panel state machine
//!
//! Elm-style: every user or timer event goes through [`transition`], which
//! mutates the owned [`PanelState`] and returns the effects the runtime must
//! carry out. Host-owned settings and catalog are passed in read-only.

mod effect;
pub mod event;
pub mod policy;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::{Event, GraceTimer};
pub use policy::{plan_assignment, Assignment};
pub use state::PanelState;
pub use transition::{transition, TransitionError, TransitionResult};
