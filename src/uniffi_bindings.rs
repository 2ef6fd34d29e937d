//! UniFFI bindings for recipe-roulette
//!
//! FFI-compatible types and functions for iOS and Android front-ends.
//! The async finder is wrapped in blocking functions that own their tokio runtime.

use std::fmt;
use std::time::Duration;

use log::debug;

use crate::{FinderError, IngredientList, RecipeDetail, RecipeFinder, RouletteError};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: u64,
    pub title: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    /// Image URL (empty string if none)
    pub image: String,
    /// Source URL (empty string if none)
    pub source_url: String,
    /// Ingredient lines as written in the recipe
    pub ingredients: Vec<String>,
    /// Steps of the first instruction set, in order
    pub steps: Vec<String>,
}

impl From<RecipeDetail> for FfiRecipe {
    fn from(recipe: RecipeDetail) -> Self {
        let steps = recipe.steps().iter().map(|s| s.step.clone()).collect();
        FfiRecipe {
            id: recipe.id,
            title: recipe.title,
            ready_in_minutes: recipe.ready_in_minutes,
            servings: recipe.servings,
            image: recipe.image.unwrap_or_default(),
            source_url: recipe.source_url.unwrap_or_default(),
            ingredients: recipe
                .extended_ingredients
                .into_iter()
                .map(|line| line.original)
                .collect(),
            steps,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiError {
    /// No ingredients were given
    InvalidInput { message: String },
    /// The search returned nothing
    NoMatchFound { message: String },
    /// A remote call failed
    FetchFailed { message: String },
    /// Configuration or API key problem
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiError::NoMatchFound { message } => write!(f, "{}", message),
            FfiError::FetchFailed { message } => write!(f, "{}", message),
            FfiError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiError {}

impl From<FinderError> for FfiError {
    fn from(err: FinderError) -> Self {
        let message = err.user_message().to_string();
        match err {
            FinderError::NoMatchFound => FfiError::NoMatchFound { message },
            FinderError::RemoteFetchFailed(_) => FfiError::FetchFailed { message },
        }
    }
}

impl From<RouletteError> for FfiError {
    fn from(err: RouletteError) -> Self {
        match err {
            RouletteError::Finder(e) => e.into(),
            RouletteError::Validation(e) => FfiError::InvalidInput {
                message: e.to_string(),
            },
            other => FfiError::ConfigError {
                message: other.to_string(),
            },
        }
    }
}

/// Options for a search from a mobile front-end
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiConfig {
    /// Optional API key (uses config or environment if not specified)
    pub api_key: Option<String>,
    /// Optional base URL override
    pub base_url: Option<String>,
    /// Optional timeout in seconds
    pub timeout_seconds: Option<u64>,
}

fn create_runtime() -> Result<tokio::runtime::Runtime, FfiError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Build a list from raw strings, skipping blanks and repeats
fn ingredient_list(raw_ingredients: &[String]) -> IngredientList {
    let mut list = IngredientList::new();
    for raw in raw_ingredients {
        if let Err(e) = list.add(raw) {
            debug!("Skipping ingredient {:?}: {}", raw, e);
        }
    }
    list
}

/// Find a random recipe for the given ingredients
///
/// Raw ingredient strings are normalized and de-duplicated first.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn find_random_recipe(
    ingredients: Vec<String>,
    config: Option<FfiConfig>,
) -> Result<FfiRecipe, FfiError> {
    let list = ingredient_list(&ingredients);
    if list.is_empty() {
        return Err(FfiError::InvalidInput {
            message: "At least one ingredient is required".to_string(),
        });
    }

    let config = config.unwrap_or_default();
    let mut builder = RecipeFinder::builder();
    if let Some(api_key) = config.api_key {
        builder = builder.api_key(api_key);
    }
    if let Some(base_url) = config.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let finder = builder.build()?;

    let rt = create_runtime()?;
    let recipe = rt.block_on(finder.find_random_recipe(list.as_slice()))?;
    Ok(recipe.into())
}

/// Normalize one ingredient the same way the list does
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_ingredient(raw: String) -> String {
    crate::ingredients::normalize(&raw)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IngredientLine, InstructionSet, InstructionStep};
    use crate::FetchError;

    #[test]
    fn test_ffi_recipe_conversion() {
        let recipe = RecipeDetail {
            id: 1,
            title: "Test Recipe".to_string(),
            ready_in_minutes: 30,
            servings: 4,
            image: None,
            source_url: Some("http://test.com".to_string()),
            analyzed_instructions: vec![InstructionSet {
                name: None,
                steps: vec![InstructionStep {
                    number: 1,
                    step: "Step 1".to_string(),
                }],
            }],
            extended_ingredients: vec![IngredientLine {
                original: "1 cup test ingredient".to_string(),
                name: Some("test ingredient".to_string()),
            }],
        };

        let ffi: FfiRecipe = recipe.into();
        assert_eq!(ffi.title, "Test Recipe");
        assert_eq!(ffi.image, "");
        assert_eq!(ffi.source_url, "http://test.com");
        assert_eq!(ffi.ingredients, vec!["1 cup test ingredient".to_string()]);
        assert_eq!(ffi.steps, vec!["Step 1".to_string()]);
    }

    #[test]
    fn test_error_conversion_uses_user_message() {
        let err: FfiError = FinderError::from(FetchError::Search("boom".into())).into();
        assert_eq!(
            err.to_string(),
            "Failed to fetch recipes. Please try again later."
        );

        let err: FfiError = RouletteError::MissingApiKey.into();
        assert!(matches!(err, FfiError::ConfigError { .. }));
    }

    #[test]
    fn test_find_random_recipe_rejects_blank_input() {
        let result = find_random_recipe(vec!["  ".to_string()], None);
        assert!(matches!(result, Err(FfiError::InvalidInput { .. })));
    }

    #[test]
    fn test_ingredient_list_skips_blanks_and_repeats() {
        let raw = vec![
            " Tomato".to_string(),
            "".to_string(),
            "tomato ".to_string(),
            "Garlic".to_string(),
        ];
        let list = ingredient_list(&raw);
        assert_eq!(
            list.as_slice(),
            &["tomato".to_string(), "garlic".to_string()]
        );
    }

    #[test]
    fn test_normalize_ingredient() {
        assert_eq!(normalize_ingredient(" Tomato ".to_string()), "tomato");
    }

    #[test]
    fn test_get_version() {
        assert!(!get_version().is_empty());
    }
}
