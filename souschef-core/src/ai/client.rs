//! AI client implementations for the Gemini API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::{AiConfig, ConfigError};
use super::fake::FakeAiClient;
use super::types::{GenerateRequest, GenerateResponse, InlineImage, Usage};

#[derive(Error, Debug)]
pub enum AiError {
    #[error("API request failed: {0}")]
    Request(String),

    #[error("API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Trait for AI clients.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Submit a generation request and return the model's structured response.
    ///
    /// The `prompt_name` identifies the calling flow for logging.
    async fn generate(
        &self,
        prompt_name: &str,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, AiError>;
}

/// Gemini API client.
///
/// Talks to the Generative Language REST API (`models/{model}:generateContent`)
/// in JSON response mode with a declared response schema. One outbound call per
/// invocation; no retries, no caching.
#[derive(Debug)]
pub struct GeminiClient {
    config: AiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new client from environment configuration.
    pub fn from_env() -> Result<Self, AiError> {
        let config = AiConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Create a new client with the given configuration.
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

/// Gemini API request format.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineImage>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Gemini API response format.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

/// Error response from the Gemini API.
#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate(
        &self,
        prompt_name: &str,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, AiError> {
        let mut parts = vec![Part {
            text: Some(request.prompt),
            inline_data: None,
        }];

        if let Some(image) = request.image {
            parts.push(Part {
                text: None,
                inline_data: Some(image),
            });
        }

        let gemini_request = GeminiRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: request.schema,
                max_output_tokens: request.max_output_tokens,
                temperature: request.temperature,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        tracing::debug!(
            prompt_name = prompt_name,
            model = &self.config.model,
            "Calling Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;

        if status != 200 {
            // Try to parse the structured error body
            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&body) {
                return Err(AiError::Api {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(AiError::Api {
                status,
                message: body,
            });
        }

        let response: GeminiResponse =
            serde_json::from_str(&body).map_err(|e| AiError::Parse(e.to_string()))?;

        // Concatenate the text parts of the first candidate
        let content = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| AiError::Parse("No text content in response".to_string()))?;

        let usage = response
            .usage_metadata
            .map(|u| Usage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        Ok(GenerateResponse { content, usage })
    }
}

/// Registry of available clients.
///
/// Use environment variables to configure:
/// - `SOUSCHEF_AI_PROVIDER`: "gemini" | "fake" (default: "gemini")
/// - `GEMINI_API_KEY`: API key for the Gemini API
pub fn create_client_from_env() -> Result<Box<dyn AiClient>, AiError> {
    let provider = std::env::var("SOUSCHEF_AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string());

    match provider.as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_env()?)),
        "fake" => Ok(Box::new(FakeAiClient::default())),
        other => Err(AiError::NotConfigured(format!(
            "Unknown AI provider: {}",
            other
        ))),
    }
}
