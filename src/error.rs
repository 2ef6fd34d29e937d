use std::error::Error as StdError;

use thiserror::Error;

/// Boxed cause carried by remote failures so fakes don't need a `reqwest::Error`.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Errors that can occur while setting up or using the roulette
#[derive(Error, Debug)]
pub enum RouletteError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No API key in the builder, config file or environment
    #[error("API key not found in config or SPOONACULAR_API_KEY")]
    MissingApiKey,

    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// Ingredient input was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The search itself failed
    #[error(transparent)]
    Finder(#[from] FinderError),
}

/// Why an ingredient could not be added to the list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter an ingredient.")]
    Empty,

    #[error("\"{0}\" is already in your list.")]
    Duplicate(String),
}

/// Failure of one of the two remote calls.
///
/// The display strings are the service-boundary messages; the transport
/// cause is kept as the error source for diagnostics.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch recipes")]
    Search(#[source] BoxError),

    #[error("Failed to fetch recipe details")]
    Details {
        id: u64,
        #[source]
        source: BoxError,
    },
}

/// Outcome of a failed `find_random_recipe` call
#[derive(Error, Debug)]
pub enum FinderError {
    /// The search returned no candidates
    #[error("No recipes matched the given ingredients")]
    NoMatchFound,

    /// Either the search or the detail request failed
    #[error(transparent)]
    RemoteFetchFailed(#[from] FetchError),
}

impl FinderError {
    /// Message to show the end user. Both remote failures share one message.
    pub fn user_message(&self) -> &'static str {
        match self {
            FinderError::NoMatchFound => {
                "No recipes found with these ingredients. Try different ingredients!"
            }
            FinderError::RemoteFetchFailed(_) => "Failed to fetch recipes. Please try again later.",
        }
    }
}
