use log::{debug, error, info};
use rand::Rng;

use crate::builder::RecipeFinderBuilder;
use crate::client::RecipeSource;
use crate::error::FinderError;
use crate::model::RecipeDetail;

/// Picks one random recipe for a set of ingredients.
///
/// Stateless per call: every invocation runs a fresh search and a fresh
/// detail fetch, with no retry and no caching. Callers are responsible
/// for not starting overlapping searches.
pub struct RecipeFinder {
    source: Box<dyn RecipeSource>,
}

impl RecipeFinder {
    pub fn new(source: Box<dyn RecipeSource>) -> Self {
        RecipeFinder { source }
    }

    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }

    /// Search by `ingredients`, choose one candidate uniformly at random
    /// and return its full details.
    ///
    /// `ingredients` must be non-empty.
    pub async fn find_random_recipe(
        &self,
        ingredients: &[String],
    ) -> Result<RecipeDetail, FinderError> {
        debug_assert!(!ingredients.is_empty(), "searched with no ingredients");
        if ingredients.is_empty() {
            return Err(FinderError::NoMatchFound);
        }

        let candidates = self
            .source
            .search_by_ingredients(ingredients)
            .await
            .map_err(|e| {
                error!("search failed: {:?}", e);
                FinderError::from(e)
            })?;

        if candidates.is_empty() {
            info!("No recipes matched {:?}", ingredients);
            return Err(FinderError::NoMatchFound);
        }

        let index = rand::thread_rng().gen_range(0..candidates.len());
        let id = candidates[index].id;
        info!(
            "Picked recipe {} out of {} candidates",
            id,
            candidates.len()
        );

        let recipe = self.source.recipe_details(id).await.map_err(|e| {
            error!("details failed: {:?}", e);
            FinderError::from(e)
        })?;
        debug!("{:#?}", recipe);

        Ok(recipe)
    }
}
