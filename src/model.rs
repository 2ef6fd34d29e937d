use serde::{Deserialize, Serialize};

/// Minimal record returned by the ingredient search.
///
/// Only `id` is needed to fetch the full recipe; everything else is
/// ranking metadata that the search endpoint may or may not fill in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCandidate {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_type: Option<String>,
    #[serde(default)]
    pub used_ingredient_count: Option<u32>,
    #[serde(default)]
    pub missed_ingredient_count: Option<u32>,
    #[serde(default)]
    pub likes: Option<u32>,
}

/// Fully hydrated recipe from the detail endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub analyzed_instructions: Vec<InstructionSet>,
    #[serde(default)]
    pub extended_ingredients: Vec<IngredientLine>,
}

/// A named group of steps, e.g. one for the sauce and one for the main dish
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructionSet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionStep {
    pub number: u32,
    pub step: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub original: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl RecipeDetail {
    /// Steps to display: the first analyzed instruction set only.
    pub fn steps(&self) -> &[InstructionStep] {
        self.analyzed_instructions
            .first()
            .map(|set| set.steps.as_slice())
            .unwrap_or(&[])
    }

    /// Plain-text card for terminal and other text-only front-ends.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&format!(
            "Ready in {} minutes · Serves {}\n",
            self.ready_in_minutes, self.servings
        ));
        if let Some(url) = &self.source_url {
            out.push_str(&format!("Source: {}\n", url));
        }

        if !self.extended_ingredients.is_empty() {
            out.push_str("\nIngredients:\n");
            for line in &self.extended_ingredients {
                out.push_str(&format!("- {}\n", line.original));
            }
        }

        let steps = self.steps();
        if !steps.is_empty() {
            out.push_str("\nInstructions:\n");
            for step in steps {
                out.push_str(&format!("{}. {}\n", step.number, step.step));
            }
        }

        out
    }
}
