pub mod ai;
pub mod expert;

pub use ai::{
    AiClient, AiConfig, AiError, ChatMessage, ChatRequest, ChatResponse, ConfigError, FakeClient,
    OpenAiClient, Role, Usage,
};
pub use expert::{ask, Answer, AskError, Expert};
