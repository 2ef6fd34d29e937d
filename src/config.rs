use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com/recipes";

/// Top-level configuration, resolved once at startup
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RouletteConfig {
    /// Remote service connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Parameters sent with every ingredient search
    #[serde(default)]
    pub search: SearchConfig,
}

/// Connection settings for the recipe service
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// API key (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<String>,
    /// Base URL the endpoint paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. None leaves the transport default in place.
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: None,
        }
    }
}

/// Query parameters for `findByIngredients`.
///
/// The defaults match what the service expects from this client: up to
/// 100 candidates, ranking mode 2 (maximize used ingredients), pantry
/// staples ignored.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    #[serde(default = "default_number")]
    pub number: u32,
    #[serde(default = "default_ranking")]
    pub ranking: u8,
    #[serde(default = "default_ignore_pantry")]
    pub ignore_pantry: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            number: default_number(),
            ranking: default_ranking(),
            ignore_pantry: default_ignore_pantry(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_number() -> u32 {
    100
}

fn default_ranking() -> u8 {
    2
}

fn default_ignore_pantry() -> bool {
    true
}

impl RouletteConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with ROULETTE__ prefix
    /// 2. roulette.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: ROULETTE__API__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// API key from the config, falling back to SPOONACULAR_API_KEY
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .filter(|key| !key.is_empty())
    }
}

/// Load configuration from `roulette.toml` and `ROULETTE__*` variables
pub fn load_config() -> Result<RouletteConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("roulette").required(false))
        .add_source(
            Environment::with_prefix("ROULETTE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
