//! AI prompt templates.

pub mod photo_to_recipe;
pub mod random_recipe;
pub mod text_to_recipe;

pub use photo_to_recipe::render_photo_to_recipe_prompt;
pub use random_recipe::render_random_recipe_prompt;
pub use text_to_recipe::render_text_to_recipe_prompt;
