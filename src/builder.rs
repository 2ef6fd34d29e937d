use std::time::Duration;

use crate::client::{RecipeSource, SpoonacularClient};
use crate::config::RouletteConfig;
use crate::error::RouletteError;
use crate::finder::RecipeFinder;

/// Builder for configuring a [`RecipeFinder`]
#[derive(Default)]
pub struct RecipeFinderBuilder {
    config: Option<RouletteConfig>,
    source: Option<Box<dyn RecipeSource>>,
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeFinderBuilder {
    /// Use an explicit configuration instead of loading `roulette.toml`
    ///
    /// # Example
    /// ```
    /// use recipe_roulette::{RecipeFinder, RouletteConfig};
    ///
    /// let builder = RecipeFinder::builder()
    ///     .config(RouletteConfig::default());
    /// ```
    pub fn config(mut self, config: RouletteConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the API key directly instead of relying on config or environment
    ///
    /// # Example
    /// ```
    /// use recipe_roulette::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .api_key("your-api-key");
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point the client at a different base URL (proxies, test servers)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_roulette::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use a custom recipe source. Every other setting is then ignored.
    pub fn source(mut self, source: Box<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Resolve configuration and build the finder
    ///
    /// # Errors
    /// Returns `RouletteError` if:
    /// - the configuration file or environment is invalid
    /// - no API key can be found
    /// - the HTTP client cannot be created
    pub fn build(self) -> Result<RecipeFinder, RouletteError> {
        if let Some(source) = self.source {
            return Ok(RecipeFinder::new(source));
        }

        let mut config = match self.config {
            Some(config) => config,
            None => RouletteConfig::load()?,
        };

        if let Some(key) = self.api_key {
            config.api.api_key = Some(key);
        }
        if let Some(url) = self.base_url {
            config.api.base_url = url;
        }

        let api_key = config
            .resolve_api_key()
            .ok_or(RouletteError::MissingApiKey)?;
        let timeout = self
            .timeout
            .or_else(|| config.api.timeout.map(Duration::from_secs));
        let client =
            SpoonacularClient::new(api_key, &config.api.base_url, timeout, config.search)?;

        Ok(RecipeFinder::new(Box::new(client)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_explicit_key() {
        let result = RecipeFinder::builder()
            .config(RouletteConfig::default())
            .api_key("test-key")
            .base_url("http://localhost:9")
            .timeout(Duration::from_secs(3))
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_key_in_config() {
        let mut config = RouletteConfig::default();
        config.api.api_key = Some("test-key".to_string());

        assert!(RecipeFinder::builder().config(config).build().is_ok());
    }

    #[test]
    fn test_build_with_sub_second_timeout() {
        let result = RecipeFinder::builder()
            .config(RouletteConfig::default())
            .api_key("test-key")
            .timeout(Duration::from_millis(250))
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_max_timeout() {
        let result = RecipeFinder::builder()
            .config(RouletteConfig::default())
            .api_key("test-key")
            .timeout(Duration::MAX)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_api_key() {
        std::env::remove_var("SPOONACULAR_API_KEY");
        let result = RecipeFinder::builder()
            .config(RouletteConfig::default())
            .build();
        assert!(matches!(result, Err(RouletteError::MissingApiKey)));
    }
}
