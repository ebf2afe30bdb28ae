//! Fake AI client for testing.
//!
//! Returns deterministic responses keyed by prompt name, allowing tests to run
//! without network access or API costs.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::client::{AiClient, AiError};
use super::types::{GenerateRequest, GenerateResponse, Usage};

/// A fake AI client for testing.
///
/// Responses are matched by the prompt name of the calling flow. If no match
/// is found, returns a default response or an error. Every invocation is
/// recorded so tests can assert whether the model was called.
#[derive(Debug)]
pub struct FakeAiClient {
    /// Map of prompt name -> response content
    responses: HashMap<String, String>,
    /// Map of prompt name -> injected error message
    errors: HashMap<String, String>,
    /// Default response if no match found
    default_response: Option<String>,
    /// Prompt names of every request, in call order
    calls: Mutex<Vec<String>>,
}

impl Default for FakeAiClient {
    fn default() -> Self {
        Self {
            responses: HashMap::new(),
            errors: HashMap::new(),
            default_response: Some("{}".to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeAiClient {
    /// Create a new FakeAiClient with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            errors: HashMap::new(),
            default_response: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a FakeAiClient that returns a specific response for one prompt name.
    pub fn with_response(prompt_name: &str, content: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_name, content);
        client
    }

    /// Add a response for a prompt name.
    pub fn add_response(&mut self, prompt_name: &str, content: &str) {
        self.responses
            .insert(prompt_name.to_string(), content.to_string());
    }

    /// Make requests for a prompt name fail with an API error.
    pub fn with_error(mut self, prompt_name: &str, message: &str) -> Self {
        self.errors
            .insert(prompt_name.to_string(), message.to_string());
        self
    }

    /// Set the default response when no prompt name matches.
    pub fn with_default_response(mut self, content: &str) -> Self {
        self.default_response = Some(content.to_string());
        self
    }

    /// Prompt names of every request made, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn generate(
        &self,
        prompt_name: &str,
        _request: GenerateRequest,
    ) -> Result<GenerateResponse, AiError> {
        self.calls.lock().unwrap().push(prompt_name.to_string());

        if let Some(message) = self.errors.get(prompt_name) {
            return Err(AiError::Api {
                status: 500,
                message: message.clone(),
            });
        }

        if let Some(content) = self.responses.get(prompt_name) {
            return Ok(GenerateResponse {
                content: content.clone(),
                usage: Usage::default(),
            });
        }

        match &self.default_response {
            Some(content) => Ok(GenerateResponse {
                content: content.clone(),
                usage: Usage::default(),
            }),
            None => Err(AiError::Request(format!(
                "FakeAiClient: no response configured for prompt {}",
                prompt_name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            prompt: "test".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_matches_by_prompt_name() {
        let fake = FakeAiClient::with_response("soup", r#"{"done": true}"#);

        let response = fake.generate("soup", request()).await.unwrap();

        assert_eq!(response.content, r#"{"done": true}"#);
    }

    #[tokio::test]
    async fn test_no_match_is_an_error() {
        let fake = FakeAiClient::new();

        let result = fake.generate("soup", request()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_default_response() {
        let fake = FakeAiClient::new().with_default_response("fallback");

        let response = fake.generate("anything", request()).await.unwrap();

        assert_eq!(response.content, "fallback");
    }

    #[tokio::test]
    async fn test_injected_error() {
        let fake = FakeAiClient::new().with_error("soup", "model overloaded");

        let result = fake.generate("soup", request()).await;

        match result {
            Err(AiError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "model overloaded");
            }
            other => panic!("expected Api error, got {:?}", other.map(|r| r.content)),
        }
    }

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let fake = FakeAiClient::default();

        fake.generate("first", request()).await.unwrap();
        fake.generate("second", request()).await.unwrap();

        assert_eq!(fake.calls(), vec!["first", "second"]);
        assert_eq!(fake.call_count(), 2);
    }
}
