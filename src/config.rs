//! Panel runtime configuration

use std::time::Duration;
use thiserror::Error;

/// How long the splash trusts an empty catalog to still be loading
pub const DEFAULT_AVAILABILITY_GRACE: Duration = Duration::from_secs(3);

const GRACE_ENV: &str = "CHAT_PANEL_GRACE_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidMillis { var: &'static str, value: String },
}

/// Configuration for the panel runtime
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Delay between splash activation and trusting the model catalog
    pub availability_grace: Duration,
    /// Capacity of the inbound event queue
    pub input_capacity: usize,
    /// Capacity of the UI broadcast channel
    pub ui_capacity: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            availability_grace: DEFAULT_AVAILABILITY_GRACE,
            input_capacity: 32,
            ui_capacity: 128,
        }
    }
}

impl PanelConfig {
    /// Read overrides from the environment, keeping defaults for anything unset
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMillis`] when `CHAT_PANEL_GRACE_MS` is set
    /// but is not a whole number of milliseconds.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(GRACE_ENV) {
            config.availability_grace = parse_millis(GRACE_ENV, &value)?;
        }
        Ok(config)
    }

    /// Like [`PanelConfig::try_from_env`], but falls back to defaults on bad input
    #[must_use]
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring invalid panel configuration");
            Self::default()
        })
    }
}

fn parse_millis(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidMillis {
            var,
            value: value.to_string(),
        })
}
