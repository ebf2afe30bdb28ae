//! AI request and response types.

use serde::Serialize;

/// An inline image attached to a generation request.
#[derive(Debug, Clone, Serialize)]
pub struct InlineImage {
    /// MIME type of the image (e.g., "image/jpeg").
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

/// Request for a structured generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// The prompt text.
    pub prompt: String,
    /// Optional inline image for vision prompts.
    pub image: Option<InlineImage>,
    /// Schema the model's JSON response must conform to.
    pub schema: serde_json::Value,
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Token usage information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Response from a generation.
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    /// The generated content (JSON text conforming to the request schema).
    pub content: String,
    /// Token usage statistics.
    pub usage: Usage,
}
