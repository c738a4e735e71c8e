//! Centralized definitions for the models the panel can present
//!
//! Adding a model means adding one entry here; menu ordering follows this table.

use super::ModelId;

/// Presentation metadata for a known model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelDef {
    /// Wire identifier (e.g. "gpt-4")
    pub id: &'static str,
    /// Menu label shown when the model is available
    pub label: &'static str,
    /// Shown in place of the model when the catalog lacks it.
    /// `None` hides the model entirely.
    pub unavailable_hint: Option<&'static str>,
    /// Where the hint points the user
    pub unavailable_url: Option<&'static str>,
}

impl ModelDef {
    #[must_use]
    pub fn model_id(&self) -> ModelId {
        ModelId::new(self.id)
    }
}

/// All known model definitions, in menu order
#[must_use]
pub fn all_models() -> &'static [ModelDef] {
    &[
        ModelDef {
            id: ModelId::GPT_35_TURBO,
            label: "GPT-3.5-TURBO (Fast, recommended)",
            unavailable_hint: None,
            unavailable_url: None,
        },
        ModelDef {
            id: ModelId::GPT_4,
            label: "GPT-4 (Better and larger input, but slower and more pricey)",
            unavailable_hint: Some("Looking for GPT-4? You need to sign up on the waitlist here"),
            unavailable_url: Some("https://openai.com/waitlist/gpt-4-api"),
        },
        ModelDef {
            id: ModelId::GPT_4_32K,
            label: "GPT-4-32K (Extremely long input, but even more pricey than GPT-4)",
            unavailable_hint: Some("OpenAI hasn't made GPT-4-32K available yet."),
            unavailable_url: Some("https://community.openai.com/t/how-to-get-access-to-gpt-4-32k/"),
        },
    ]
}

/// Look up the definition for a model id
#[must_use]
pub fn find_model(id: &ModelId) -> Option<&'static ModelDef> {
    all_models().iter().find(|def| def.id == id.as_str())
}
