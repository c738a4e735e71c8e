//! Default model and verbosity resolution
//!
//! Precedence: explicit settings value, then the value carried by the
//! conversation being created from, then a hardcoded baseline. The baseline
//! is the fallback when no tier is present, so resolution is total.

use crate::conversation::{Conversation, Verbosity};
use crate::model::ModelId;
use crate::settings::Settings;

/// Model used when neither settings nor a source conversation name one
pub const BASELINE_MODEL: &str = ModelId::GPT_35_TURBO;

/// Verbosity used when neither settings nor a source conversation name one
pub const BASELINE_VERBOSITY: Verbosity = Verbosity::Normal;

/// First present value in precedence order
#[must_use]
pub fn first_present<T>(tiers: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    tiers.into_iter().flatten().next()
}

/// Resolve the model for a conversation created from `source`
#[must_use]
pub fn resolve_model(settings: &Settings, source: Option<&Conversation>) -> ModelId {
    first_present([
        settings.default_model().cloned(),
        source.map(|c| c.model.clone()),
    ])
    .unwrap_or_else(|| ModelId::new(BASELINE_MODEL))
}

/// Resolve the verbosity for a conversation created from `source`
#[must_use]
pub fn resolve_verbosity(settings: &Settings, source: Option<&Conversation>) -> Verbosity {
    first_present([settings.default_verbosity(), source.map(|c| c.verbosity)])
        .unwrap_or(BASELINE_VERBOSITY)
}
