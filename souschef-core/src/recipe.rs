//! Canonical recipe model and response normalization.

use serde::{Deserialize, Serialize};

use crate::flows::{ArrayRecipeOutput, TextRecipeOutput};

/// A generated recipe with a name and two ordered text lists.
///
/// After normalization neither list contains empty or whitespace-only
/// entries; order of appearance is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Text handed to speech synthesis when reading the recipe aloud.
    pub fn spoken_text(&self) -> String {
        format!(
            "Recipe: {}. Ingredients: {}. Instructions: {}",
            self.recipe_name,
            self.ingredients.join(", "),
            self.instructions.join(" ")
        )
    }
}

/// Split a newline-delimited blob into trimmed, non-empty lines.
pub fn split_lines(blob: &str) -> Vec<String> {
    blob.split('\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Trim each entry and drop the empty ones.
pub fn clean_lines(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Normalize the newline-delimited text-mode output into a [`Recipe`].
pub fn normalize_text_recipe(raw: TextRecipeOutput) -> Recipe {
    Recipe {
        recipe_name: raw.recipe_name,
        ingredients: split_lines(&raw.ingredients_list),
        instructions: split_lines(&raw.instructions),
    }
}

/// Normalize the array-shaped photo/random output into a [`Recipe`].
pub fn normalize_array_recipe(raw: ArrayRecipeOutput) -> Recipe {
    Recipe {
        recipe_name: raw.recipe_name,
        ingredients: clean_lines(raw.ingredients),
        instructions: clean_lines(raw.instructions),
    }
}

/// Strip the leading "- " bullet the model sometimes emits on ingredients.
pub fn display_ingredient(ingredient: &str) -> &str {
    ingredient.strip_prefix("- ").unwrap_or(ingredient)
}

/// Strip a leading "N." step number; display layers number steps themselves.
pub fn display_instruction(instruction: &str) -> &str {
    let rest = instruction.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < instruction.len() {
        if let Some(rest) = rest.strip_prefix('.') {
            return rest.trim_start();
        }
    }
    instruction
}
