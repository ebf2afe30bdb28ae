//! Prompt template for generating a recipe from typed ingredients.

/// Prompt name for logging and test matching.
pub const TEXT_TO_RECIPE_PROMPT_NAME: &str = "text_to_recipe";

/// Render the text-mode prompt with the given ingredient list.
pub fn render_text_to_recipe_prompt(ingredients: &str) -> String {
    format!(
        r#"You are a world-class chef specializing in creating delicious recipes based on a given list of ingredients.

Create a recipe using the following ingredients, prioritizing those ingredients:
{ingredients}

The recipe should include:
- A creative and appealing recipe name.
- A clear and concise list of ingredients with quantities.
- Numbered, step-by-step instructions for preparing the recipe.
"#,
        ingredients = ingredients
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_text_to_recipe_prompt("chicken, broccoli, garlic");

        assert!(prompt.contains("world-class chef"));
        assert!(prompt.contains("chicken, broccoli, garlic"));
        assert!(prompt.contains("Numbered, step-by-step instructions"));
    }
}
