//! Cookbook core crate.
//!
//! Everything here is free of page concerns:
//!
//! - `model`: category and recipe records as they appear in the data file.
//! - `catalog`: the loaded, validated data set (categories, recipes, popular
//!   selection, featured selection).
//! - `search`: term and category filtering over recipe slices, plus the
//!   search state a page keeps between events.
//! - `handoff`: query string parsing, the cross-page handoff store and the
//!   detail page identifier policy.
//! - `email`: newsletter address validation.
//!
//! Records are created once at load time and never mutated afterwards; the
//! catalog is meant to be shared behind an `Arc`.

pub mod catalog;
pub mod email;
pub mod handoff;
pub mod model;
pub mod search;

pub use catalog::{Catalog, CatalogError};
pub use email::is_valid_email;
pub use handoff::{
    HandoffStore, MemoryHandoff, Query, SELECTED_RECIPE_KEY, resolve_detail_id,
};
pub use model::{
    Category, CategoryId, Featured, FeaturedMain, Ingredient, Recipe, RecipeId, RelatedRef,
    format_rating,
};
pub use search::{CategoryFilter, SearchState, filter, filter_by_category, matches_term};
