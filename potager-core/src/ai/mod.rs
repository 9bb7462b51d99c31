//! AI client module for chat-completion calls.
//!
//! This module provides:
//! - `AiClient` trait for abstracting the chat-completion backend
//! - `OpenAiClient` implementation built on async-openai
//! - `FakeClient` for tests (no network)
//! - Configuration via environment variables
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `OPENAI_API_KEY` (required): API key for the chat-completion service
//! - `POTAGER_AI_MODEL` (optional): Model name, e.g., "gpt-4o-mini"
//! - `POTAGER_AI_BASE_URL` (optional): API base URL override (e.g., a proxy)
//! - `POTAGER_AI_TEMPERATURE` (optional): Sampling temperature
//! - `POTAGER_AI_RATE_LIMIT_MS` (optional): Delay between requests in ms
//!
//! # Example
//!
//! ```ignore
//! use potager_core::ai::{AiClient, OpenAiClient, ChatMessage, ChatRequest};
//!
//! let client = OpenAiClient::from_env()?;
//!
//! let request = ChatRequest {
//!     messages: vec![ChatMessage::user("Hello!")],
//!     ..Default::default()
//! };
//!
//! let response = client.complete("test", request).await?;
//! println!("Response: {}", response.content);
//! ```

mod client;
mod config;
mod fake;
mod types;

pub use client::{AiClient, AiError, OpenAiClient};
pub use config::{AiConfig, ConfigError};
pub use fake::FakeClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};
