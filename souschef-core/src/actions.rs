//! Entry points for recipe generation.
//!
//! Each entry point validates its input, runs the matching AI flow, and
//! normalizes the response into a [`Recipe`]. The `try_` variants surface
//! typed errors for callers that map them onto statuses; the envelope
//! variants fold everything into a display-ready [`GenerateOutcome`].

use thiserror::Error;

use crate::ai::{AiClient, AiError};
use crate::data_uri::{is_image_data_uri, DataUri, DataUriError};
use crate::flows;
use crate::recipe::{normalize_array_recipe, normalize_text_recipe, Recipe};

/// Minimum number of characters required in the ingredients text.
pub const MIN_INGREDIENTS_CHARS: usize = 3;

#[derive(Error, Debug)]
pub enum GenerateError {
    /// Input failed validation; the model was never called.
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    DataUri(#[from] DataUriError),
    #[error(transparent)]
    Ai(#[from] AiError),
}

/// Result envelope handed to display surfaces.
///
/// Exactly one of `recipe` and `error` is set by the generate functions.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub recipe: Option<Recipe>,
    pub error: Option<String>,
}

/// Generate a recipe from typed ingredient text.
pub async fn try_generate_from_text(
    ai_client: &dyn AiClient,
    ingredients: &str,
) -> Result<Recipe, GenerateError> {
    if ingredients.chars().count() < MIN_INGREDIENTS_CHARS {
        return Err(GenerateError::Invalid(
            "Please provide some ingredients.".to_string(),
        ));
    }

    let raw = flows::text_to_recipe(ai_client, ingredients).await?;
    Ok(normalize_text_recipe(raw))
}

/// Generate a recipe from a photo supplied as an image data URI.
pub async fn try_generate_from_photo(
    ai_client: &dyn AiClient,
    photo_data_uri: &str,
) -> Result<Recipe, GenerateError> {
    if !is_image_data_uri(photo_data_uri) {
        return Err(GenerateError::Invalid("Invalid image format.".to_string()));
    }

    let photo = DataUri::parse(photo_data_uri)?;
    let raw = flows::photo_to_recipe(ai_client, &photo).await?;
    Ok(normalize_array_recipe(raw))
}

/// Generate a surprise recipe with no input.
pub async fn try_generate_random(ai_client: &dyn AiClient) -> Result<Recipe, GenerateError> {
    let raw = flows::random_recipe(ai_client).await?;
    Ok(normalize_array_recipe(raw))
}

fn outcome_from(context: &str, result: Result<Recipe, GenerateError>) -> GenerateOutcome {
    match result {
        Ok(recipe) => GenerateOutcome {
            recipe: Some(recipe),
            error: None,
        },
        // Validation messages go to the user as-is, without the generic wrap.
        Err(GenerateError::Invalid(message)) => GenerateOutcome {
            recipe: None,
            error: Some(message),
        },
        Err(e) => {
            tracing::error!("Error in {}: {}", context, e);
            GenerateOutcome {
                recipe: None,
                error: Some(format!("Failed to generate recipe. {}", e)),
            }
        }
    }
}

/// Text entry point returning the display envelope.
pub async fn generate_from_text(ai_client: &dyn AiClient, ingredients: &str) -> GenerateOutcome {
    outcome_from(
        "generate_from_text",
        try_generate_from_text(ai_client, ingredients).await,
    )
}

/// Photo entry point returning the display envelope.
pub async fn generate_from_photo(
    ai_client: &dyn AiClient,
    photo_data_uri: &str,
) -> GenerateOutcome {
    outcome_from(
        "generate_from_photo",
        try_generate_from_photo(ai_client, photo_data_uri).await,
    )
}

/// Random entry point returning the display envelope.
pub async fn generate_random(ai_client: &dyn AiClient) -> GenerateOutcome {
    outcome_from("generate_random", try_generate_random(ai_client).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeAiClient;

    const TEXT_RESPONSE: &str = r#"{"recipeName":"Chicken Stir Fry","ingredientsList":"chicken\nbroccoli","instructions":"1. Cook\n2. Serve"}"#;

    #[tokio::test]
    async fn test_text_rejects_short_input_without_model_call() {
        let client = FakeAiClient::new();

        let result = try_generate_from_text(&client, "ab").await;

        match result {
            Err(GenerateError::Invalid(message)) => {
                assert_eq!(message, "Please provide some ingredients.");
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_photo_rejects_bad_prefix_without_model_call() {
        let client = FakeAiClient::new();

        let result = try_generate_from_photo(&client, "https://example.com/photo.png").await;

        match result {
            Err(GenerateError::Invalid(message)) => {
                assert_eq!(message, "Invalid image format.");
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_text_envelope_success() {
        let client = FakeAiClient::with_response(
            crate::ai::prompts::text_to_recipe::TEXT_TO_RECIPE_PROMPT_NAME,
            TEXT_RESPONSE,
        );

        let outcome = generate_from_text(&client, "chicken, broccoli").await;

        let recipe = outcome.recipe.expect("Expected a recipe");
        assert_eq!(recipe.recipe_name, "Chicken Stir Fry");
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn test_envelope_wraps_model_error() {
        let client = FakeAiClient::new()
            .with_error(crate::ai::prompts::random_recipe::RANDOM_RECIPE_PROMPT_NAME, "model overloaded");

        let outcome = generate_random(&client).await;

        assert!(outcome.recipe.is_none());
        let error = outcome.error.expect("Expected an error");
        assert!(error.starts_with("Failed to generate recipe."));
        assert!(error.contains("model overloaded"));
    }
}
