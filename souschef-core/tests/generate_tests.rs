//! End-to-end tests for the generate entry points.
//!
//! These drive the full validate -> prompt -> parse -> normalize path
//! against a fake AI client, with no network involved.

use souschef_core::ai::prompts::photo_to_recipe::PHOTO_TO_RECIPE_PROMPT_NAME;
use souschef_core::ai::prompts::random_recipe::RANDOM_RECIPE_PROMPT_NAME;
use souschef_core::ai::prompts::text_to_recipe::TEXT_TO_RECIPE_PROMPT_NAME;
use souschef_core::ai::FakeAiClient;
use souschef_core::{generate_from_photo, generate_from_text, generate_random, Recipe};

const TEXT_RESPONSE: &str = r#"{"recipeName":"Chicken Stir Fry","ingredientsList":"chicken\nbroccoli","instructions":"1. Cook\n2. Serve"}"#;
const PHOTO_RESPONSE: &str = r#"{"recipeName":"Garden Omelette","ingredients":[" a ","","b"],"instructions":["Whisk eggs.","Cook."]}"#;
const RANDOM_RESPONSE: &str = r#"{"recipeName":"Midnight Ramen","ingredients":["noodles","broth"],"instructions":["1. Boil.","2. Slurp."]}"#;

const PHOTO_DATA_URI: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";

#[tokio::test]
async fn test_text_end_to_end() {
    let client = FakeAiClient::with_response(TEXT_TO_RECIPE_PROMPT_NAME, TEXT_RESPONSE);

    let outcome = generate_from_text(&client, "chicken, broccoli").await;

    assert_eq!(
        outcome.recipe,
        Some(Recipe {
            recipe_name: "Chicken Stir Fry".to_string(),
            ingredients: vec!["chicken".to_string(), "broccoli".to_string()],
            instructions: vec!["1. Cook".to_string(), "2. Serve".to_string()],
        })
    );
    assert!(outcome.error.is_none());
    assert_eq!(client.calls(), vec![TEXT_TO_RECIPE_PROMPT_NAME.to_string()]);
}

#[tokio::test]
async fn test_short_text_fails_validation_without_model_call() {
    let client = FakeAiClient::with_response(TEXT_TO_RECIPE_PROMPT_NAME, TEXT_RESPONSE);

    let outcome = generate_from_text(&client, "ab").await;

    assert!(outcome.recipe.is_none());
    assert_eq!(outcome.error.as_deref(), Some("Please provide some ingredients."));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_three_char_text_passes_validation() {
    let client = FakeAiClient::with_response(TEXT_TO_RECIPE_PROMPT_NAME, TEXT_RESPONSE);

    let outcome = generate_from_text(&client, "egg").await;

    assert!(outcome.recipe.is_some());
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_length_check_counts_characters_not_bytes() {
    let client = FakeAiClient::with_response(TEXT_TO_RECIPE_PROMPT_NAME, TEXT_RESPONSE);

    // Three characters, four bytes
    let outcome = generate_from_text(&client, "œuf").await;

    assert!(outcome.recipe.is_some());
}

#[tokio::test]
async fn test_photo_end_to_end_trims_array_entries() {
    let client = FakeAiClient::with_response(PHOTO_TO_RECIPE_PROMPT_NAME, PHOTO_RESPONSE);

    let outcome = generate_from_photo(&client, PHOTO_DATA_URI).await;

    let recipe = outcome.recipe.expect("Expected a recipe");
    assert_eq!(recipe.recipe_name, "Garden Omelette");
    assert_eq!(recipe.ingredients, vec!["a", "b"]);
    assert_eq!(recipe.instructions, vec!["Whisk eggs.", "Cook."]);
}

#[tokio::test]
async fn test_photo_rejects_non_image_uri_without_model_call() {
    let client = FakeAiClient::with_response(PHOTO_TO_RECIPE_PROMPT_NAME, PHOTO_RESPONSE);

    let outcome = generate_from_photo(&client, "https://example.com/photo.png").await;

    assert!(outcome.recipe.is_none());
    assert_eq!(outcome.error.as_deref(), Some("Invalid image format."));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_non_base64_photo_uri_is_wrapped_without_model_call() {
    let client = FakeAiClient::with_response(PHOTO_TO_RECIPE_PROMPT_NAME, PHOTO_RESPONSE);

    // Passes the data:image prefix check but carries no base64 payload
    let outcome = generate_from_photo(&client, "data:image/png,rawbytes").await;

    assert!(outcome.recipe.is_none());
    let error = outcome.error.expect("Expected an error");
    assert!(error.starts_with("Failed to generate recipe."));
    assert!(error.contains("not base64-encoded"));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_random_end_to_end() {
    let client = FakeAiClient::with_response(RANDOM_RECIPE_PROMPT_NAME, RANDOM_RESPONSE);

    let outcome = generate_random(&client).await;

    let recipe = outcome.recipe.expect("Expected a recipe");
    assert_eq!(recipe.recipe_name, "Midnight Ramen");
    assert_eq!(client.calls(), vec![RANDOM_RECIPE_PROMPT_NAME.to_string()]);
}

#[tokio::test]
async fn test_model_failure_is_wrapped() {
    let client = FakeAiClient::new().with_error(TEXT_TO_RECIPE_PROMPT_NAME, "model overloaded");

    let outcome = generate_from_text(&client, "chicken, broccoli").await;

    assert!(outcome.recipe.is_none());
    let error = outcome.error.expect("Expected an error");
    assert!(error.starts_with("Failed to generate recipe."));
    assert!(error.contains("model overloaded"));
}

#[tokio::test]
async fn test_malformed_model_response_is_wrapped() {
    let client = FakeAiClient::with_response(TEXT_TO_RECIPE_PROMPT_NAME, "not json");

    let outcome = generate_from_text(&client, "chicken, broccoli").await;

    assert!(outcome.recipe.is_none());
    let error = outcome.error.expect("Expected an error");
    assert!(error.starts_with("Failed to generate recipe."));
    assert!(error.contains("Failed to parse recipe response"));
}
