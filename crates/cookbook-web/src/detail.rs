//! Recipe detail page.

use crate::config::SiteConfig;
use crate::document::{CardKey, Document};
use crate::markup;
use crate::render::{RECIPES_FAILED, Rendered, render_collection};
use cookbook_core::{
    Catalog, Category, HandoffStore, Query, Recipe, RelatedRef, SELECTED_RECIPE_KEY,
    resolve_detail_id,
};

pub const CATEGORY_FALLBACK: &str = "Category";
pub const NAME_FALLBACK: &str = "Recipe";
pub const RECIPE_NOT_FOUND: &str = "Recipe not found";

const RELATED_CONTAINER: &str = "relatedRecipes";

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Link to the category listing. Categories are matched by name; an unknown
/// name is passed through url-escaped.
pub fn category_href(category: &str, categories: &[Category]) -> String {
    match categories.iter().find(|c| c.name == category) {
        Some(found) => format!("category.html?id={}", found.id),
        None => format!("category.html?id={}", urlencoding::encode(category)),
    }
}

/// Populates every detail slot present on the page. Each slot is guarded on
/// its own; a page missing some of them still gets the rest.
pub fn render_detail(
    doc: &mut Document,
    recipe: &Recipe,
    categories: &[Category],
    config: &SiteConfig,
) {
    doc.set_text("recipeTitle", &recipe.name);
    doc.set_text("recipeName", &recipe.name);
    doc.set_text("recipeDescription", &recipe.description);
    doc.set_text("recipeCategory", &recipe.category);
    doc.set_text("recipeRating", &recipe.rating_label());
    doc.set_text("recipeTime", &recipe.time);
    let servings = recipe.servings.map(|n| n.to_string()).unwrap_or_default();
    doc.set_text("recipeServings", &servings);
    doc.set_text("recipeDifficulty", &recipe.difficulty);

    if doc.set_text(
        "recipeCategoryLink",
        or_fallback(&recipe.category, CATEGORY_FALLBACK),
    ) {
        doc.set_attr(
            "recipeCategoryLink",
            "href",
            &category_href(&recipe.category, categories),
        );
    }

    let name = or_fallback(&recipe.name, NAME_FALLBACK);
    let image = recipe.image_ref().map(|image| config.image_path(image));
    if doc.has_slot("recipeThumb") {
        doc.set_attr("recipeThumb", "alt", name);
        if let Some(src) = &image {
            doc.set_attr("recipeThumb", "src", src);
        }
    }
    if let Some(src) = &image {
        if doc.set_attr("recipeHero", "src", src) {
            doc.set_attr("recipeHero", "alt", name);
        }
    }

    if doc.has_slot("ingredientsList") {
        let html: String = recipe
            .ingredients
            .iter()
            .map(markup::ingredient_item)
            .collect();
        doc.set_html("ingredientsList", html);
    }

    if doc.has_slot("instructionsList") {
        let html: String = recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(index, step)| markup::instruction_item(index, step))
            .collect();
        doc.set_html("instructionsList", html);
    }

    if recipe.has_notes() {
        doc.remove_class("tipsSection", "hidden");
        if doc.has_slot("tipsList") {
            let html: String = recipe
                .notes
                .iter()
                .flatten()
                .map(|note| markup::note_item(note))
                .collect();
            doc.set_html("tipsList", html);
        }
    } else {
        doc.add_class("tipsSection", "hidden");
        doc.clear("tipsList");
    }
}

/// Renders the related cards. Ids resolve against `all`; ids with no match
/// are dropped.
pub fn render_related(
    doc: &mut Document,
    related: Option<&[RelatedRef]>,
    all: &[Recipe],
    config: &SiteConfig,
) -> Rendered {
    if !doc.has_slot(RELATED_CONTAINER) {
        return Rendered::Skipped;
    }
    let Some(related) = related else {
        doc.clear(RELATED_CONTAINER);
        return Rendered::Skipped;
    };

    let resolved: Vec<&Recipe> = related
        .iter()
        .filter_map(|entry| match entry {
            RelatedRef::Recipe(recipe) => Some(recipe.as_ref()),
            RelatedRef::Id(id) => {
                let found = all.iter().find(|recipe| recipe.id == *id);
                if found.is_none() {
                    tracing::debug!(id, "related recipe not in catalog");
                }
                found
            }
        })
        .collect();

    render_collection(
        doc,
        RELATED_CONTAINER,
        &resolved,
        RECIPES_FAILED,
        |recipe| {
            markup::related_card(recipe, config).map(|html| (CardKey::Recipe(recipe.id), html))
        },
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    /// Not a detail page.
    Skipped,
    Rendered { id: u32, related: Rendered },
    NotFound { id: u32 },
}

/// Page-ready entry of the detail page: resolves the id, renders the record
/// and its related cards, then clears the handoff value. An id that matches
/// nothing leaves the detail slots untouched and shows the not-found message
/// in the related area.
pub fn init_detail_page(
    doc: &mut Document,
    catalog: &Catalog,
    query: &Query,
    handoff: &mut dyn HandoffStore,
    config: &SiteConfig,
) -> DetailOutcome {
    if !doc.has_slot("recipeTitle") {
        return DetailOutcome::Skipped;
    }

    let id = resolve_detail_id(query, &*handoff, config.default_recipe_id);
    let Some(recipe) = catalog.recipe(id) else {
        tracing::warn!(id, "recipe not found");
        doc.set_html(RELATED_CONTAINER, markup::not_found_block(RECIPE_NOT_FOUND));
        return DetailOutcome::NotFound { id };
    };

    render_detail(doc, recipe, &catalog.categories, config);
    let related = match recipe.related.as_deref() {
        Some(entries) => render_related(doc, Some(entries), &catalog.recipes, config),
        None => Rendered::Skipped,
    };
    handoff.remove(SELECTED_RECIPE_KEY);
    tracing::info!(id, name = %recipe.name, "recipe detail rendered");

    DetailOutcome::Rendered { id, related }
}
