//! Prompt template for generating a recipe from a photo of ingredients.

/// Prompt name for logging and test matching.
pub const PHOTO_TO_RECIPE_PROMPT_NAME: &str = "photo_to_recipe";

/// Render the photo-mode prompt. The photo itself travels as an inline
/// image part after the prompt text.
pub fn render_photo_to_recipe_prompt() -> String {
    r#"You are a world-class chef. You are excellent at creating recipes based on a set of ingredients.

Based on the photo of ingredients, generate a recipe with the following structure:

Recipe Name: (The name of the recipe)

Ingredients:
- (Ingredient 1)
- (Ingredient 2)
- (etc.)

Instructions:
1. (Step 1)
2. (Step 2)
3. (etc.)

Here is the photo of ingredients."#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_photo_to_recipe_prompt();

        assert!(prompt.contains("world-class chef"));
        assert!(prompt.contains("Recipe Name:"));
        assert!(prompt.contains("photo of ingredients"));
    }
}
