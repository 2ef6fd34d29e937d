use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Serialize;

use crate::config::{ApiConfig, SearchConfig, DEFAULT_BASE_URL};
use crate::error::{FetchError, RouletteError};
use crate::model::{RecipeDetail, SearchCandidate};

/// The two calls the finder needs from a recipe database
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Find candidates that use the given (already normalized) ingredients
    async fn search_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<SearchCandidate>, FetchError>;

    /// Fetch the full recipe for a candidate id
    async fn recipe_details(&self, id: u64) -> Result<RecipeDetail, FetchError>;
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    #[serde(rename = "apiKey")]
    api_key: &'a str,
    ingredients: String,
    number: u32,
    ranking: u8,
    #[serde(rename = "ignorePantry")]
    ignore_pantry: bool,
}

#[derive(Serialize)]
struct DetailQuery<'a> {
    #[serde(rename = "apiKey")]
    api_key: &'a str,
}

/// HTTP client for the Spoonacular recipes API
pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
    search: SearchConfig,
}

impl SpoonacularClient {
    /// Create a client with an already resolved API key.
    ///
    /// `timeout` of None leaves the transport default in place.
    pub fn new(
        api_key: String,
        base_url: &str,
        timeout: Option<Duration>,
        search: SearchConfig,
    ) -> Result<Self, RouletteError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(SpoonacularClient {
            client: builder.build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            search,
        })
    }

    /// Create a client from the `[api]` and `[search]` configuration sections
    pub fn from_config(
        api_key: String,
        api: &ApiConfig,
        search: SearchConfig,
    ) -> Result<Self, RouletteError> {
        Self::new(
            api_key,
            &api.base_url,
            api.timeout.map(Duration::from_secs),
            search,
        )
    }

    /// Create a client against the public endpoint with default search settings
    pub fn with_api_key(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        SpoonacularClient {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
            search: SearchConfig::default(),
        }
    }

    async fn get_search(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<SearchCandidate>, reqwest::Error> {
        let query = SearchQuery {
            api_key: &self.api_key,
            ingredients: ingredients.join(","),
            number: self.search.number,
            ranking: self.search.ranking,
            ignore_pantry: self.search.ignore_pantry,
        };

        self.client
            .get(format!("{}/findByIngredients", self.base_url))
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn get_details(&self, id: u64) -> Result<RecipeDetail, reqwest::Error> {
        self.client
            .get(format!("{}/{}/information", self.base_url, id))
            .query(&DetailQuery {
                api_key: &self.api_key,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    async fn search_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<SearchCandidate>, FetchError> {
        debug!("Searching recipes for {:?}", ingredients);
        let candidates = self
            .get_search(ingredients)
            .await
            .map_err(|e| FetchError::Search(Box::new(e)))?;
        debug!("{:?}", candidates);
        Ok(candidates)
    }

    async fn recipe_details(&self, id: u64) -> Result<RecipeDetail, FetchError> {
        debug!("Fetching recipe details for {}", id);
        let recipe = self
            .get_details(id)
            .await
            .map_err(|e| FetchError::Details {
                id,
                source: Box::new(e),
            })?;
        debug!("{:?}", recipe);
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_search_sends_expected_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/findByIngredients")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apiKey".into(), "fake_api_key".into()),
                Matcher::UrlEncoded("ingredients".into(), "tomato,garlic".into()),
                Matcher::UrlEncoded("number".into(), "100".into()),
                Matcher::UrlEncoded("ranking".into(), "2".into()),
                Matcher::UrlEncoded("ignorePantry".into(), "true".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 1, "title": "Test Recipe"}]"#)
            .create_async()
            .await;

        let client = SpoonacularClient::with_base_url("fake_api_key".to_string(), server.url());
        let candidates = client
            .search_by_ingredients(&["tomato".to_string(), "garlic".to_string()])
            .await
            .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, 1);
        assert_eq!(candidates[0].title.as_deref(), Some("Test Recipe"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/findByIngredients")
            .match_query(Matcher::Any)
            .with_status(402)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "failure", "message": "quota exceeded"}"#)
            .create_async()
            .await;

        let client = SpoonacularClient::with_base_url("fake_api_key".to_string(), server.url());
        let err = client
            .search_by_ingredients(&["tomato".to_string()])
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Search(_)));
        assert_eq!(err.to_string(), "Failed to fetch recipes");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_details_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/1/information")
            .match_query(Matcher::UrlEncoded("apiKey".into(), "fake_api_key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 1, "title": "Test Recipe", "readyInMinutes": 30, "servings": 4}"#)
            .create_async()
            .await;

        let client = SpoonacularClient::with_base_url("fake_api_key".to_string(), server.url());
        let recipe = client.recipe_details(1).await.unwrap();

        assert_eq!(recipe.id, 1);
        assert_eq!(recipe.title, "Test Recipe");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_details_malformed_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/9/information")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let client = SpoonacularClient::with_base_url("fake_api_key".to_string(), server.url());
        let err = client.recipe_details(9).await.unwrap_err();

        assert!(matches!(err, FetchError::Details { id: 9, .. }));
        assert_eq!(err.to_string(), "Failed to fetch recipe details");
    }

    #[test]
    fn test_from_config_applies_settings() {
        let api = ApiConfig {
            api_key: None,
            base_url: "http://localhost:1234/recipes/".to_string(),
            timeout: Some(5),
        };
        let client =
            SpoonacularClient::from_config("key".to_string(), &api, SearchConfig::default())
                .unwrap();
        assert_eq!(client.base_url, "http://localhost:1234/recipes");
        assert_eq!(client.timeout, Some(Duration::from_secs(5)));
        assert_eq!(client.search.number, 100);
    }

    #[test]
    fn test_new_keeps_sub_second_timeout() {
        let client = SpoonacularClient::new(
            "key".to_string(),
            DEFAULT_BASE_URL,
            Some(Duration::from_millis(250)),
            SearchConfig::default(),
        )
        .unwrap();
        assert_eq!(client.timeout, Some(Duration::from_millis(250)));
    }

    #[tokio::test]
    async fn test_sub_second_timeout_still_allows_fast_responses() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/findByIngredients")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 3}]"#)
            .create_async()
            .await;

        let client = SpoonacularClient::new(
            "key".to_string(),
            &server.url(),
            Some(Duration::from_millis(900)),
            SearchConfig::default(),
        )
        .unwrap();
        let candidates = client
            .search_by_ingredients(&["egg".to_string()])
            .await
            .unwrap();
        assert_eq!(candidates[0].id, 3);
    }
}
