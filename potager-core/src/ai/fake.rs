//! Fake AI client for testing.
//!
//! This client returns deterministic responses based on prompt matching,
//! allowing tests to run without network access or API costs.

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Usage};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A fake AI client for testing.
///
/// Responses are matched by checking if any message in the request contains a
/// registered substring. If no match is found, returns a default response or
/// error. Every request is recorded so tests can assert on the messages sent.
#[derive(Debug, Default)]
pub struct FakeClient {
    /// Map of message substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// Every request this client has received, in order.
    requests: RwLock<Vec<ChatRequest>>,
}

impl FakeClient {
    /// Create a new FakeClient with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeClient that returns a specific response for requests
    /// whose messages contain a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    /// Add a response for requests whose messages contain a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for FakeClient {
    async fn complete(
        &self,
        _prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let all_content = request
            .messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        self.requests.write().unwrap().push(request);

        let responses = self.responses.read().unwrap();
        for (pattern, response) in responses.iter() {
            if all_content.contains(&pattern.to_lowercase()) {
                return Ok(ChatResponse {
                    content: response.clone(),
                    usage: Usage::default(),
                });
            }
        }

        match &self.default_response {
            Some(response) => Ok(ChatResponse {
                content: response.clone(),
                usage: Usage::default(),
            }),
            None => Err(AiError::Api(format!(
                "FakeClient: No response configured for request (first 100 chars): {}",
                all_content.chars().take(100).collect::<String>()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ChatMessage;

    fn user_request(content: &str) -> ChatRequest {
        ChatRequest {
            messages: vec![ChatMessage::user(content)],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fake_client_matching() {
        let client = FakeClient::with_response("hello", "world");
        let result = client
            .complete("test", user_request("Say hello to the user"))
            .await
            .unwrap();
        assert_eq!(result.content, "world");
    }

    #[tokio::test]
    async fn test_fake_client_case_insensitive() {
        let client = FakeClient::with_response("HELLO", "world");
        let result = client
            .complete("test", user_request("hello there"))
            .await
            .unwrap();
        assert_eq!(result.content, "world");
    }

    #[tokio::test]
    async fn test_fake_client_no_match() {
        let client = FakeClient::new();
        let result = client.complete("test", user_request("random prompt")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fake_client_default_response() {
        let client = FakeClient::new().with_default_response("default");
        let result = client
            .complete("test", user_request("random prompt"))
            .await
            .unwrap();
        assert_eq!(result.content, "default");
    }

    #[tokio::test]
    async fn test_fake_client_matches_system_message() {
        let client = FakeClient::with_response("vegetable", "from the system prompt");
        let request = ChatRequest {
            messages: vec![
                ChatMessage::system("You are a vegetable specialist."),
                ChatMessage::user("How do I store cabbage?"),
            ],
            ..Default::default()
        };
        let result = client.complete("test", request).await.unwrap();
        assert_eq!(result.content, "from the system prompt");
    }

    #[tokio::test]
    async fn test_fake_client_records_requests() {
        let client = FakeClient::new().with_default_response("ok");
        client
            .complete("test", user_request("first"))
            .await
            .unwrap();
        client
            .complete("test", user_request("second"))
            .await
            .unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].messages[0].content, "first");
        assert_eq!(requests[1].messages[0].content, "second");
    }
}
