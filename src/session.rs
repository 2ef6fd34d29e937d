//! State behind one recipe-roulette screen.
//!
//! The display layer never mutates anything directly: it calls the
//! operations below and renders the [`SessionSnapshot`] it gets back.

use log::{debug, warn};

use crate::error::{FinderError, ValidationError};
use crate::finder::RecipeFinder;
use crate::ingredients::IngredientList;
use crate::model::RecipeDetail;

/// Error currently shown next to the search control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The search returned no candidates
    NoMatchFound,
    /// One of the remote calls failed
    FetchFailed,
}

impl SearchError {
    pub fn message(&self) -> &'static str {
        match self {
            SearchError::NoMatchFound => {
                "No recipes found with these ingredients. Try different ingredients!"
            }
            SearchError::FetchFailed => "Failed to fetch recipes. Please try again later.",
        }
    }
}

impl From<&FinderError> for SearchError {
    fn from(err: &FinderError) -> Self {
        match err {
            FinderError::NoMatchFound => SearchError::NoMatchFound,
            FinderError::RemoteFetchFailed(_) => SearchError::FetchFailed,
        }
    }
}

/// What a call to [`RouletteSession::search`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Not started: the list is empty or a search is already running
    Skipped,
    /// A recipe is now displayed
    Found,
    /// The search ran and failed
    Failed(SearchError),
}

/// Handle for one in-flight search.
///
/// Carries the ingredient list as it was when the search started, so
/// edits made while it runs don't change what is searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    ingredients: Vec<String>,
}

impl SearchTicket {
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }
}

/// Read-only view handed to the display layer
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub ingredients: Vec<String>,
    pub draft: String,
    pub can_add: bool,
    pub can_search: bool,
    pub notice: Option<ValidationError>,
    pub recipe: Option<RecipeDetail>,
    pub error: Option<SearchError>,
    pub is_loading: bool,
}

#[derive(Debug, Default)]
pub struct RouletteSession {
    ingredients: IngredientList,
    draft: String,
    notice: Option<ValidationError>,
    recipe: Option<RecipeDetail>,
    error: Option<SearchError>,
    is_loading: bool,
    generation: u64,
}

impl RouletteSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingredients(&self) -> &IngredientList {
        &self.ingredients
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn notice(&self) -> Option<&ValidationError> {
        self.notice.as_ref()
    }

    pub fn recipe(&self) -> Option<&RecipeDetail> {
        self.recipe.as_ref()
    }

    pub fn error(&self) -> Option<SearchError> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Replace the text being typed. Clears any stale validation notice.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.notice = None;
    }

    /// Whether the current draft would be accepted
    pub fn can_add(&self) -> bool {
        self.ingredients.check(&self.draft).is_ok()
    }

    /// Add the current draft to the list and clear it
    pub fn add_draft(&mut self) -> Result<(), ValidationError> {
        let draft = std::mem::take(&mut self.draft);
        match self.add_ingredient(&draft) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.draft = draft;
                Err(e)
            }
        }
    }

    /// Add `raw` directly, bypassing the draft
    pub fn add_ingredient(&mut self, raw: &str) -> Result<(), ValidationError> {
        match self.ingredients.add(raw) {
            Ok(()) => {
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                debug!("Rejected ingredient {:?}: {}", raw, e);
                self.notice = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Remove the ingredient at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn remove_ingredient(&mut self, index: usize) -> String {
        self.ingredients.remove(index)
    }

    /// Whether the search control should be enabled
    pub fn can_search(&self) -> bool {
        !self.ingredients.is_empty() && !self.is_loading
    }

    /// Start a search. Returns `None` when searching isn't allowed.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if !self.can_search() {
            return None;
        }
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        Some(SearchTicket {
            generation: self.generation,
            ingredients: self.ingredients.snapshot(),
        })
    }

    /// Apply the outcome of the search started with `ticket`.
    ///
    /// Returns false, leaving the state untouched, when a newer search has
    /// been started since.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<RecipeDetail, FinderError>,
    ) -> bool {
        if ticket.generation != self.generation {
            warn!(
                "Ignoring stale search result (generation {}, current {})",
                ticket.generation, self.generation
            );
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(recipe) => {
                self.recipe = Some(recipe);
                self.error = None;
            }
            Err(e) => {
                self.recipe = None;
                self.error = Some(SearchError::from(&e));
            }
        }
        true
    }

    /// Run a whole search with `finder` and apply the result
    pub async fn search(&mut self, finder: &RecipeFinder) -> SearchOutcome {
        let Some(ticket) = self.begin_search() else {
            return SearchOutcome::Skipped;
        };
        let result = finder.find_random_recipe(ticket.ingredients()).await;
        self.complete_search(ticket, result);
        match self.error {
            Some(error) => SearchOutcome::Failed(error),
            None => SearchOutcome::Found,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            ingredients: self.ingredients.snapshot(),
            draft: self.draft.clone(),
            can_add: self.can_add(),
            can_search: self.can_search(),
            notice: self.notice.clone(),
            recipe: self.recipe.clone(),
            error: self.error,
            is_loading: self.is_loading,
        }
    }
}
