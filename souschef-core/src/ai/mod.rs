//! AI client module for recipe generation via the Gemini API.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI providers
//! - `GeminiClient` implementation speaking the Generative Language REST API
//! - `FakeAiClient` deterministic implementation for tests and offline use
//! - Configuration via environment variables
//! - Prompt templates for the three generation modes
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `GEMINI_API_KEY` (required): API key for the Gemini API
//!   (`GOOGLE_API_KEY` is accepted as a fallback)
//! - `SOUSCHEF_AI_PROVIDER` (optional): "gemini" or "fake"
//! - `SOUSCHEF_AI_MODEL` (optional): Model name, e.g., "gemini-2.5-flash"
//! - `SOUSCHEF_AI_BASE_URL` (optional): API base URL
//! - `SOUSCHEF_AI_TIMEOUT_SECS` (optional): Request timeout in seconds

mod client;
mod config;
mod fake;
pub mod prompts;
mod types;

pub use client::{create_client_from_env, AiClient, AiError, GeminiClient};
pub use config::{AiConfig, ConfigError};
pub use fake::FakeAiClient;
pub use types::{GenerateRequest, GenerateResponse, InlineImage, Usage};
