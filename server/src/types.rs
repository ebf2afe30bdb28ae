use serde::Serialize;
use souschef_core::Recipe;
use utoipa::ToSchema;

/// A generated recipe as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            recipe_name: recipe.recipe_name,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
        }
    }
}
