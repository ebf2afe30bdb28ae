use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use souschef_core::ai::create_client_from_env;
use souschef_core::{
    display_ingredient, display_instruction, generate_from_photo, generate_from_text,
    generate_random, validate_image, DataUri, Recipe, RequestState, MAX_FILE_SIZE,
};

#[derive(Parser)]
#[command(name = "souschef")]
#[command(about = "Turn ingredients into recipes with an AI chef", long_about = None)]
struct Cli {
    /// Print the recipe as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print the recipe as text-to-speech input
    #[arg(long, global = true)]
    spoken: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe from a list of ingredients
    Text {
        /// Ingredients to cook with, e.g. "chicken, broccoli, garlic"
        ingredients: String,
    },
    /// Generate a recipe from a photo of ingredients
    Photo {
        /// Path to an image file (JPEG, PNG, GIF, or WebP, up to 4MB)
        file: PathBuf,
    },
    /// Generate a surprise recipe
    Random,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = create_client_from_env().context("Failed to create AI client")?;

    eprintln!("Crafting your recipe...");

    let outcome = match &cli.command {
        Commands::Text { ingredients } => generate_from_text(client.as_ref(), ingredients).await,
        Commands::Photo { file } => {
            let photo_data_uri = read_photo(file)?;
            generate_from_photo(client.as_ref(), &photo_data_uri).await
        }
        Commands::Random => generate_random(client.as_ref()).await,
    };

    match RequestState::from_outcome(outcome) {
        RequestState::Success(recipe) => print_recipe(&recipe, cli.json, cli.spoken)?,
        RequestState::Error(message) => anyhow::bail!(message),
        // A finished call never lands on a non-terminal state
        RequestState::Idle | RequestState::Loading => {}
    }

    Ok(())
}

/// Read an image file and encode it as a data URI.
fn read_photo(path: &Path) -> Result<String> {
    let data = fs::read(path).context("Failed to read the image file.")?;

    if data.len() > MAX_FILE_SIZE {
        anyhow::bail!("Please upload an image smaller than 4MB.");
    }

    let content_type = validate_image(&data).map_err(|e| anyhow::anyhow!(e))?;

    Ok(DataUri::encode(&content_type, &data).to_uri())
}

fn print_recipe(recipe: &Recipe, json: bool, spoken: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recipe)?);
        return Ok(());
    }

    if spoken {
        println!("{}", recipe.spoken_text());
        return Ok(());
    }

    println!("{}", recipe.recipe_name);
    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("- {}", display_ingredient(ingredient));
    }
    println!();
    println!("Instructions:");
    for (i, instruction) in recipe.instructions.iter().enumerate() {
        println!("{}. {}", i + 1, display_instruction(instruction));
    }

    Ok(())
}
