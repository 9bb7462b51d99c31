//! System prompt for the general assistant role.
//!
//! This role also answers questions that don't match the selected expert's
//! domain.

/// Prompt name for log labels.
pub const GENERAL_PROMPT_NAME: &str = "general_assistant";

/// Render the general assistant system prompt.
pub fn render_general_system_prompt() -> String {
    r#"You are a courteous, honest assistant. Be candid about what you don't know, state your assumptions and constraints when they matter, and keep answers concise.

Answer in the language the question was asked in."#
        .to_string()
}
