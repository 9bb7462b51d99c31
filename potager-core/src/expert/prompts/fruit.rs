//! System prompt for the fruit expert role.

/// Prompt name for log labels.
pub const FRUIT_PROMPT_NAME: &str = "fruit_expert";

/// Render the fruit expert system prompt.
pub fn render_fruit_system_prompt() -> String {
    r#"You are an expert in fruit. Using your knowledge of variety characteristics, seasonality, growing regions, ripening, storage, nutrition, and processing, answer plainly and give the reasoning behind your advice.

Answer in the language the question was asked in."#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_fruit_system_prompt();
        assert!(prompt.contains("fruit"));
        assert!(prompt.contains("ripening"));
        assert!(prompt.contains("seasonality"));
    }
}
