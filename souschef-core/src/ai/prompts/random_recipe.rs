//! Prompt template for generating a completely random recipe.

/// Prompt name for logging and test matching.
pub const RANDOM_RECIPE_PROMPT_NAME: &str = "random_recipe";

/// Render the random-mode prompt. Takes no input.
pub fn render_random_recipe_prompt() -> String {
    r#"You are a creative chef. Generate a completely random recipe with the following format:

Recipe Name: (Name of the recipe)

Ingredients:
- (Ingredient 1)
- (Ingredient 2)
- (Ingredient 3)

Instructions:
1.  (Step 1)
2.  (Step 2)
3.  (Step 3)"#
        .to_string()
}
