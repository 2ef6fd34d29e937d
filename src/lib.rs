pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod finder;
pub mod ingredients;
pub mod model;
pub mod session;
pub mod uniffi_bindings;

pub use builder::RecipeFinderBuilder;
pub use client::{RecipeSource, SpoonacularClient};
pub use config::{load_config, ApiConfig, RouletteConfig, SearchConfig};
pub use error::{FetchError, FinderError, RouletteError, ValidationError};
pub use finder::RecipeFinder;
pub use ingredients::{normalize, IngredientList};
pub use model::{IngredientLine, InstructionSet, InstructionStep, RecipeDetail, SearchCandidate};
pub use session::{RouletteSession, SearchError, SearchOutcome, SearchTicket, SessionSnapshot};

/// Find a random recipe using configuration from `roulette.toml` and the environment.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let ingredients = vec!["tomato".to_string(), "garlic".to_string()];
/// let recipe = recipe_roulette::find_random_recipe(&ingredients).await?;
/// println!("{}", recipe.title);
/// # Ok(())
/// # }
/// ```
pub async fn find_random_recipe(ingredients: &[String]) -> Result<RecipeDetail, RouletteError> {
    let finder = RecipeFinder::builder().build()?;
    Ok(finder.find_random_recipe(ingredients).await?)
}
