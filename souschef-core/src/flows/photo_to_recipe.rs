//! Recipe generation from a photo of ingredients.

use serde_json::json;

use super::ArrayRecipeOutput;
use crate::ai::prompts::photo_to_recipe::{
    render_photo_to_recipe_prompt, PHOTO_TO_RECIPE_PROMPT_NAME,
};
use crate::ai::{AiClient, AiError, GenerateRequest, InlineImage};
use crate::data_uri::DataUri;

/// Generate a recipe from a photo, sent to the model as an inline image.
pub async fn photo_to_recipe(
    ai_client: &dyn AiClient,
    photo: &DataUri,
) -> Result<ArrayRecipeOutput, AiError> {
    let prompt = render_photo_to_recipe_prompt();
    let request = GenerateRequest {
        prompt,
        image: Some(InlineImage {
            mime_type: photo.mime_type.clone(),
            data: photo.data.clone(),
        }),
        schema: photo_recipe_schema(),
        max_output_tokens: None,
        temperature: None,
    };

    let response = ai_client
        .generate(PHOTO_TO_RECIPE_PROMPT_NAME, request)
        .await?;

    serde_json::from_str(&response.content)
        .map_err(|e| AiError::Parse(format!("Failed to parse recipe response: {}", e)))
}

/// Output schema declared to the model.
fn photo_recipe_schema() -> serde_json::Value {
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
                "description": "Step-by-step instructions for the recipe."
            }
        },
        "required": ["recipeName", "ingredients", "instructions"]
    })
}
