//! Recipe generation flows.
//!
//! Each flow renders its prompt, makes one AI call with a declared output
//! schema, and parses the model's JSON response into a typed output. The two
//! output shapes here are raw model output; normalization into the canonical
//! [`Recipe`](crate::recipe::Recipe) happens in [`crate::recipe`].

mod photo_to_recipe;
mod random_recipe;
mod text_to_recipe;

pub use photo_to_recipe::photo_to_recipe;
pub use random_recipe::random_recipe;
pub use text_to_recipe::text_to_recipe;

use serde::Deserialize;

/// Raw model output with ingredients and instructions as newline-delimited
/// strings (text mode).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRecipeOutput {
    pub recipe_name: String,
    pub ingredients_list: String,
    pub instructions: String,
}

/// Raw model output with ingredients and instructions as arrays of strings
/// (photo and random modes).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayRecipeOutput {
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}
