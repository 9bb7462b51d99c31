//! The ask operation: route a question to the right role and get an answer.

use thiserror::Error;

use super::keywords::looks_related;
use super::Expert;
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, Usage};

/// Upper bound for answer length.
const ANSWER_MAX_TOKENS: u32 = 1024;

#[derive(Error, Debug)]
pub enum AskError {
    #[error("Question is empty")]
    EmptyQuestion,

    #[error("AI call failed: {0}")]
    Ai(#[from] AiError),
}

/// An answer produced by [`ask`].
#[derive(Debug, Clone)]
pub struct Answer {
    /// The model's answer text.
    pub content: String,
    /// The expert the caller selected.
    pub requested: Expert,
    /// The role whose prompt actually answered.
    pub answered_by: Expert,
    /// Token usage for the call.
    pub usage: Usage,
}

impl Answer {
    /// Whether the question was rerouted to the general assistant.
    pub fn downgraded(&self) -> bool {
        self.requested != self.answered_by
    }
}

/// Answer a question as the selected expert.
///
/// Questions that don't look related to a domain expert's field are answered
/// by the general assistant instead; the rerouting is recorded on the returned
/// [`Answer`] and the call still succeeds. Empty questions are rejected before
/// any network call.
pub async fn ask(ai: &dyn AiClient, expert: Expert, question: &str) -> Result<Answer, AskError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AskError::EmptyQuestion);
    }

    let answered_by = if looks_related(expert, question) {
        expert
    } else {
        Expert::General
    };

    if answered_by != expert {
        tracing::debug!(
            requested = expert.id(),
            "Question doesn't match the selected domain, answering as the general assistant"
        );
    }

    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(answered_by.system_prompt()),
            ChatMessage::user(question),
        ],
        max_tokens: Some(ANSWER_MAX_TOKENS),
        temperature: None,
    };

    let response = ai.complete(answered_by.prompt_name(), request).await?;

    Ok(Answer {
        content: response.content,
        requested: expert,
        answered_by,
        usage: response.usage,
    })
}
