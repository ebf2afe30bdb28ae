//! Recipe generation from a list of ingredients provided as text.

use serde_json::json;

use super::TextRecipeOutput;
use crate::ai::prompts::text_to_recipe::{
    render_text_to_recipe_prompt, TEXT_TO_RECIPE_PROMPT_NAME,
};
use crate::ai::{AiClient, AiError, GenerateRequest};

/// Generate a recipe from a comma-separated ingredient list.
///
/// Returns the raw model output; ingredients and instructions come back as
/// newline-delimited strings.
pub async fn text_to_recipe(
    ai_client: &dyn AiClient,
    ingredients: &str,
) -> Result<TextRecipeOutput, AiError> {
    let prompt = render_text_to_recipe_prompt(ingredients);
    let request = GenerateRequest {
        prompt,
        image: None,
        schema: text_recipe_schema(),
        max_output_tokens: None,
        temperature: None,
    };

    let response = ai_client
        .generate(TEXT_TO_RECIPE_PROMPT_NAME, request)
        .await?;

    serde_json::from_str(&response.content)
        .map_err(|e| AiError::Parse(format!("Failed to parse recipe response: {}", e)))
}

/// Output schema declared to the model.
fn text_recipe_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recipeName": {
                "type": "STRING",
                "description": "The name of the generated recipe."
            },
            "ingredientsList": {
                "type": "STRING",
                "description": "A list of ingredients for the recipe."
            },
            "instructions": {
                "type": "STRING",
                "description": "Step-by-step instructions for preparing the recipe."
            }
        },
        "required": ["recipeName", "ingredientsList", "instructions"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeAiClient;

    #[tokio::test]
    async fn test_parses_model_response() {
        let fake = FakeAiClient::with_response(
            TEXT_TO_RECIPE_PROMPT_NAME,
            r#"{"recipeName": "Garlic Butter Chicken", "ingredientsList": "chicken\ngarlic", "instructions": "1. Sear\n2. Baste"}"#,
        );

        let output = text_to_recipe(&fake, "chicken, garlic").await.unwrap();

        assert_eq!(output.recipe_name, "Garlic Butter Chicken");
        assert_eq!(output.ingredients_list, "chicken\ngarlic");
        assert_eq!(output.instructions, "1. Sear\n2. Baste");
    }

    #[tokio::test]
    async fn test_rejects_malformed_response() {
        let fake = FakeAiClient::with_response(TEXT_TO_RECIPE_PROMPT_NAME, "not json");

        let result = text_to_recipe(&fake, "chicken").await;

        assert!(matches!(result, Err(AiError::Parse(_))));
    }

    #[test]
    fn test_schema_declares_all_fields() {
        let schema = text_recipe_schema();

        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["ingredientsList"]["type"], "STRING");
        assert_eq!(
            schema["required"],
            serde_json::json!(["recipeName", "ingredientsList", "instructions"])
        );
    }
}
