//! Model availability gate for the introduction splash
//!
//! The model catalog arrives asynchronously and its completion is not
//! observable, so the splash stays optimistic for a fixed grace period before
//! trusting an empty catalog.

use crate::model::ModelCatalog;
use crate::settings::Settings;
use serde::Serialize;

/// Gate phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GatePhase {
    /// Not yet activated; reads like `Grace`
    #[default]
    Inactive,
    /// Timer scheduled, catalog not trusted yet
    Grace,
    /// Timer fired; the catalog decides the view
    Resolved,
}

/// What the splash should present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SplashView {
    /// No usable models: ask the user to fix their credentials
    Warning,
    /// Feature list, with the attribution footer unless the UI is minimal
    FeatureDiscovery { show_attribution: bool },
}

/// Single-shot grace gate. Activation schedules the timer exactly once and
/// firing is irreversible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityGate {
    phase: GatePhase,
}

impl AvailabilityGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(self) -> GatePhase {
        self.phase
    }

    /// Start the grace period. Returns false if the gate was already started,
    /// in which case no new timer must be scheduled.
    pub fn activate(&mut self) -> bool {
        if self.phase == GatePhase::Inactive {
            self.phase = GatePhase::Grace;
            true
        } else {
            false
        }
    }

    /// Mark the grace timer as fired. Only a gate in its grace period can
    /// resolve; returns false otherwise.
    pub fn fire(&mut self) -> bool {
        if self.phase == GatePhase::Grace {
            self.phase = GatePhase::Resolved;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_fired(self) -> bool {
        self.phase == GatePhase::Resolved
    }

    #[must_use]
    pub fn view(self, catalog: &ModelCatalog, settings: &Settings) -> SplashView {
        if self.is_fired() && catalog.is_empty() {
            SplashView::Warning
        } else {
            SplashView::FeatureDiscovery {
                show_attribution: !settings.minimal_ui,
            }
        }
    }
}
