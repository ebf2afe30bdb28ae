//! Random recipe generation.

use serde_json::json;

use super::ArrayRecipeOutput;
use crate::ai::prompts::random_recipe::{render_random_recipe_prompt, RANDOM_RECIPE_PROMPT_NAME};
use crate::ai::{AiClient, AiError, GenerateRequest};

/// Generate a completely random recipe. Takes no input.
pub async fn random_recipe(ai_client: &dyn AiClient) -> Result<ArrayRecipeOutput, AiError> {
    let prompt = render_random_recipe_prompt();
    let request = GenerateRequest {
        prompt,
        image: None,
        schema: random_recipe_schema(),
        max_output_tokens: None,
        temperature: None,
    };

    let response = ai_client
        .generate(RANDOM_RECIPE_PROMPT_NAME, request)
        .await?;

    serde_json::from_str(&response.content)
        .map_err(|e| AiError::Parse(format!("Failed to parse recipe response: {}", e)))
}

/// Output schema declared to the model.
fn random_recipe_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recipeName": {
                "type": "STRING",
                "description": "The name of the recipe."
            },
            "ingredients": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of ingredients for the recipe."
            },
            "instructions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of numbered instructions for the recipe."
            }
        },
        "required": ["recipeName", "ingredients", "instructions"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeAiClient;

    #[tokio::test]
    async fn test_parses_model_response() {
        let fake = FakeAiClient::with_response(
            RANDOM_RECIPE_PROMPT_NAME,
            r#"{"recipeName": "Midnight Ramen", "ingredients": ["noodles", "broth"], "instructions": ["1. Boil.", "2. Slurp."]}"#,
        );

        let output = random_recipe(&fake).await.unwrap();

        assert_eq!(output.recipe_name, "Midnight Ramen");
        assert_eq!(output.instructions.len(), 2);
    }

    #[tokio::test]
    async fn test_propagates_api_errors() {
        let fake = FakeAiClient::new().with_error(RANDOM_RECIPE_PROMPT_NAME, "quota exceeded");

        let result = random_recipe(&fake).await;

        assert!(matches!(result, Err(AiError::Api { .. })));
    }
}
