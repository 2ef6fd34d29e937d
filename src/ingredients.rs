use crate::error::ValidationError;

/// Trim and lower-case raw user input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Ordered, duplicate-free list of normalized ingredient names.
///
/// Insertion order is kept for display. Every member is non-empty,
/// lower-cased and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query-only check of whether `raw` could be added.
    ///
    /// Returns the normalized form on success. Does not touch the list.
    pub fn check(&self, raw: &str) -> Result<String, ValidationError> {
        let ingredient = normalize(raw);
        if ingredient.is_empty() {
            return Err(ValidationError::Empty);
        }
        if self.contains(&ingredient) {
            return Err(ValidationError::Duplicate(ingredient));
        }
        Ok(ingredient)
    }

    /// Normalize `raw` and append it. The list is left unchanged on error.
    pub fn add(&mut self, raw: &str) -> Result<(), ValidationError> {
        let ingredient = self.check(raw)?;
        self.items.push(ingredient);
        Ok(())
    }

    /// Remove and return the ingredient at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`. Removal is always driven by an
    /// index taken from the current list, so this is a caller bug.
    pub fn remove(&mut self, index: usize) -> String {
        self.items.remove(index)
    }

    /// Whether the list holds `raw` once normalized.
    pub fn contains(&self, raw: &str) -> bool {
        let ingredient = normalize(raw);
        self.items.iter().any(|item| *item == ingredient)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Owned copy for a search; later edits to the list don't affect it.
    pub fn snapshot(&self) -> Vec<String> {
        self.items.clone()
    }
}
