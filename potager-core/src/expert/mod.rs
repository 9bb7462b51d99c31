//! Expert roles: who answers a question, and with which system prompt.

mod ask;
mod keywords;
pub mod prompts;

pub use ask::{ask, Answer, AskError};
pub use keywords::looks_related;

use serde::{Deserialize, Serialize};

/// An answering role.
///
/// `Vegetable` and `Fruit` are offered in the UI; `General` answers when a
/// question doesn't look related to the selected domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expert {
    Vegetable,
    Fruit,
    General,
}

impl Expert {
    /// Stable identifier used in the API.
    pub fn id(&self) -> &'static str {
        match self {
            Expert::Vegetable => "vegetable",
            Expert::Fruit => "fruit",
            Expert::General => "general",
        }
    }

    /// Human-readable label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Expert::Vegetable => "Vegetable expert",
            Expert::Fruit => "Fruit expert",
            Expert::General => "General assistant",
        }
    }

    /// One-line description shown next to the role selector.
    pub fn description(&self) -> &'static str {
        match self {
            Expert::Vegetable => "Cultivation, varieties, nutrition, storage, and cooking",
            Expert::Fruit => "Varieties, seasonality, ripening, storage, and processing",
            Expert::General => "Answers anything outside the produce aisle",
        }
    }

    /// Roles offered in the UI's selector.
    pub fn selectable() -> &'static [Expert] {
        &[Expert::Vegetable, Expert::Fruit]
    }

    /// The system prompt for this role.
    pub fn system_prompt(&self) -> String {
        match self {
            Expert::Vegetable => prompts::vegetable::render_vegetable_system_prompt(),
            Expert::Fruit => prompts::fruit::render_fruit_system_prompt(),
            Expert::General => prompts::general::render_general_system_prompt(),
        }
    }

    /// Prompt name used for log labels.
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Expert::Vegetable => prompts::vegetable::VEGETABLE_PROMPT_NAME,
            Expert::Fruit => prompts::fruit::FRUIT_PROMPT_NAME,
            Expert::General => prompts::general::GENERAL_PROMPT_NAME,
        }
    }
}
