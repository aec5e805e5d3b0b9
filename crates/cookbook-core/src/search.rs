use crate::model::{Category, CategoryId, Recipe, RecipeId};
use serde::{Deserialize, Serialize};

/// Category filter of the home page. `All` is the sentinel for "no filter".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Id(CategoryId),
}

/// Search state a page keeps between events. `filtered` holds the ids of the
/// popular recipes currently rendered, in render order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub search_term: String,
    pub current_category: CategoryFilter,
    pub filtered: Vec<RecipeId>,
}

impl SearchState {
    pub fn new(initial: &[&Recipe]) -> Self {
        Self {
            search_term: String::new(),
            current_category: CategoryFilter::All,
            filtered: initial.iter().map(|recipe| recipe.id).collect(),
        }
    }
}

/// Case-insensitive substring match of an already lowered and trimmed term
/// against a recipe's name or category.
pub fn matches_term(recipe: &Recipe, lowered_term: &str) -> bool {
    recipe.name.to_lowercase().contains(lowered_term)
        || recipe.category.to_lowercase().contains(lowered_term)
}

/// Order-preserving subset of `records` whose name or category contains
/// `term`. An empty term returns the input unchanged.
pub fn filter<'a>(term: &str, records: &[&'a Recipe]) -> Vec<&'a Recipe> {
    if term.is_empty() {
        return records.to_vec();
    }

    let term = term.trim().to_lowercase();
    records
        .iter()
        .copied()
        .filter(|recipe| matches_term(recipe, &term))
        .collect()
}

/// Records belonging to the selected category. Recipes reference categories
/// by name, so the id is resolved through `categories` first; an id with no
/// category selects nothing.
pub fn filter_by_category<'a>(
    selected: CategoryFilter,
    categories: &[Category],
    records: &[&'a Recipe],
) -> Vec<&'a Recipe> {
    let CategoryFilter::Id(id) = selected else {
        return records.to_vec();
    };

    let Some(category) = categories.iter().find(|category| category.id == id) else {
        return Vec::new();
    };

    records
        .iter()
        .copied()
        .filter(|recipe| recipe.category == category.name)
        .collect()
}
