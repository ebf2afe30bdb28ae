pub mod actions;
pub mod ai;
pub mod data_uri;
pub mod flows;
pub mod image;
pub mod recipe;
pub mod state;

pub use actions::{
    generate_from_photo, generate_from_text, generate_random, GenerateError, GenerateOutcome,
    MIN_INGREDIENTS_CHARS,
};
pub use data_uri::{is_image_data_uri, DataUri, DataUriError};
pub use image::{validate_image, MAX_FILE_SIZE};
pub use recipe::{
    display_ingredient, display_instruction, normalize_array_recipe, normalize_text_recipe, Recipe,
};
pub use state::RequestState;
