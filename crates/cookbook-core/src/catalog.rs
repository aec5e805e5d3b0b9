use crate::model::{Category, CategoryId, Featured, Recipe, RecipeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}

/// The whole data set a page works from.
///
/// `popular` selects (by id, in order) the recipes shown and searched on the
/// home page; when absent every recipe is popular.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub popular: Option<Vec<RecipeId>>,
    #[serde(default)]
    pub featured: Option<Featured>,
}

impl Catalog {
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let catalog = serde_json::from_str::<Catalog>(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            recipes = catalog.recipes.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "category",
                    id: category.id,
                });
            }
        }

        seen.clear();
        for recipe in &self.recipes {
            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "recipe",
                    id: recipe.id,
                });
            }
        }
        Ok(())
    }

    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Popular recipes in display order. Ids that match no recipe are skipped.
    pub fn popular(&self) -> Vec<&Recipe> {
        match &self.popular {
            Some(ids) => ids.iter().filter_map(|id| self.recipe(*id)).collect(),
            None => self.recipes.iter().collect(),
        }
    }

    /// Main featured recipe: the configured one if it resolves, otherwise the
    /// first recipe.
    pub fn featured_main(&self) -> Option<&Recipe> {
        self.featured
            .as_ref()
            .and_then(|featured| featured.main.as_ref())
            .and_then(|main| self.recipe(main.id))
            .or_else(|| self.recipes.first())
    }

    /// Side featured recipes: the configured ones that resolve, otherwise the
    /// second and third recipes positionally.
    pub fn featured_side(&self) -> Vec<&Recipe> {
        let side: Vec<&Recipe> = self
            .featured
            .as_ref()
            .map(|featured| {
                featured
                    .side
                    .iter()
                    .filter_map(|id| self.recipe(*id))
                    .collect()
            })
            .unwrap_or_default();

        if side.is_empty() {
            return self.recipes.iter().skip(1).take(2).collect();
        }
        side
    }
}
