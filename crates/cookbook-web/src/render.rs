//! Collection rendering.
//!
//! Writes keyed card lists into container slots and schedules their
//! staggered reveal. A card that fails to build never escapes as an error:
//! the container shows an inline message instead.

use crate::config::SiteConfig;
use crate::document::{CardKey, Document, RenderedItem};
use crate::error::MarkupError;
use crate::markup;
use crate::timer::{TimerQueue, TimerTask};
use cookbook_core::{Catalog, Category, Recipe};
use std::time::Duration;
use tokio::time::Instant;

pub const CATEGORIES_FAILED: &str = "Unable to load categories";
pub const RECIPES_FAILED: &str = "Unable to load recipes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    /// The container slot does not exist on this page.
    Skipped,
    /// A card failed to build; the inline error message is shown.
    Failed,
    Items { generation: u64, count: usize },
}

/// Renders `records` into `container` with `card`. All cards are built before
/// the container is touched, so a failure never leaves a partial list.
pub fn render_collection<T, F>(
    doc: &mut Document,
    container: &str,
    records: &[T],
    failure_message: &str,
    card: F,
) -> Rendered
where
    F: Fn(&T) -> Result<(CardKey, String), MarkupError>,
{
    if !doc.has_slot(container) {
        return Rendered::Skipped;
    }

    let items: Result<Vec<RenderedItem>, MarkupError> = records
        .iter()
        .map(|record| {
            card(record).map(|(key, markup)| RenderedItem {
                key,
                markup,
                revealed: false,
            })
        })
        .collect();

    match items {
        Ok(items) => {
            let count = items.len();
            match doc.set_items(container, items) {
                Some(generation) => Rendered::Items { generation, count },
                None => Rendered::Skipped,
            }
        }
        Err(err) => {
            tracing::error!(container, error = %err, "render failed");
            show_error(doc, container, failure_message);
            Rendered::Failed
        }
    }
}

/// Item `i` of a fresh render becomes visible at `now + i * step`.
pub fn schedule_reveal(
    timers: &mut TimerQueue,
    container: &str,
    rendered: Rendered,
    step: Duration,
    now: Instant,
) {
    let Rendered::Items { generation, count } = rendered else {
        return;
    };
    for index in 0..count {
        let offset = step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
        timers.schedule(
            now + offset,
            TimerTask::Reveal {
                container: container.to_string(),
                generation,
                index,
            },
        );
    }
}

pub fn render_categories(doc: &mut Document, categories: &[Category]) -> Rendered {
    render_collection(
        doc,
        "categoriesGrid",
        categories,
        CATEGORIES_FAILED,
        |category| {
            markup::category_card(category).map(|html| (CardKey::Category(category.id), html))
        },
    )
}

pub fn render_recipes(
    doc: &mut Document,
    container: &str,
    recipes: &[&Recipe],
    config: &SiteConfig,
) -> Rendered {
    render_collection(doc, container, recipes, RECIPES_FAILED, |recipe| {
        markup::recipe_card(recipe, config).map(|html| (CardKey::Recipe(recipe.id), html))
    })
}

/// Main card spanning two columns plus at most two side cards. Missing
/// selections fall back to the first recipes of the catalog. A side recipe
/// equal to the main one is still shown.
pub fn render_featured(doc: &mut Document, catalog: &Catalog, config: &SiteConfig) -> Rendered {
    const CONTAINER: &str = "featuredSection";
    if !doc.has_slot(CONTAINER) {
        return Rendered::Skipped;
    }
    let Some(main) = catalog.featured_main() else {
        doc.clear(CONTAINER);
        return Rendered::Items {
            generation: generation_of(doc, CONTAINER),
            count: 0,
        };
    };

    let built = markup::featured_main_card(main, config).and_then(|main_html| {
        let side = catalog
            .featured_side()
            .into_iter()
            .take(2)
            .map(|recipe| markup::featured_side_card(recipe, config))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((main_html, side))
    });

    match built {
        Ok((main_html, side)) => {
            let count = 1 + side.len();
            let html = format!(
                "{main_html}<div class=\"space-y-6\">{}</div>",
                side.concat()
            );
            doc.set_html(CONTAINER, html);
            Rendered::Items {
                generation: generation_of(doc, CONTAINER),
                count,
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "featured section failed");
            show_error(doc, CONTAINER, RECIPES_FAILED);
            Rendered::Failed
        }
    }
}

fn generation_of(doc: &Document, id: &str) -> u64 {
    doc.element(id)
        .map(|element| element.generation())
        .unwrap_or_default()
}

pub fn show_error(doc: &mut Document, id: &str, message: &str) -> bool {
    doc.set_html(id, markup::error_block(message))
}

pub fn show_loading(doc: &mut Document, id: &str) -> bool {
    doc.set_html(id, markup::loading_block())
}
