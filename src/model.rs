//! Backend model identifiers
//!
//! Model identifiers are opaque strings owned by the host. A small static table
//! describes the models the panel knows how to present.

mod catalog;
mod defs;

pub use catalog::{MenuEntry, ModelCatalog, ModelMenu};
pub use defs::{all_models, find_model, ModelDef};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a backend model variant (e.g. `gpt-4`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub const GPT_35_TURBO: &'static str = "gpt-3.5-turbo";
    pub const GPT_4: &'static str = "gpt-4";
    pub const GPT_4_32K: &'static str = "gpt-4-32k";

    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn gpt_35_turbo() -> Self {
        Self::new(Self::GPT_35_TURBO)
    }

    #[must_use]
    pub fn gpt_4() -> Self {
        Self::new(Self::GPT_4)
    }

    #[must_use]
    pub fn gpt_4_32k() -> Self {
        Self::new(Self::GPT_4_32K)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModelId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
