//! Card and list markup.
//!
//! Pure functions from records to HTML fragments. Records need a non-zero id
//! and a non-blank name; optional fields degrade to fallback visuals (a
//! gradient placeholder with the chef icon when there is no image). All text
//! is escaped.

use crate::config::SiteConfig;
use crate::document::escape_html;
use crate::error::MarkupError;
use cookbook_core::{Category, Ingredient, Recipe};

pub const RECIPE_FALLBACK_GRADIENT: &str = "from-orange-300 to-red-400";
pub const RELATED_FALLBACK_GRADIENT: &str = "from-gray-200 to-gray-300";
pub const FEATURED_MAIN_FALLBACK_GRADIENT: &str = "from-red-200 to-orange-200";
pub const FEATURED_SIDE_FALLBACK_GRADIENT: &str = "from-gray-200 to-gray-300";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Chef,
    Clock,
    Star,
    Check,
}

impl Icon {
    fn path(self) -> &'static str {
        match self {
            Icon::Chef => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 14a4 4 0 01-.9-7.9 5 5 0 019.8-1.6A4 4 0 0118 14v5H6v-5zm0 2h12"></path>"#
            }
            Icon::Clock => {
                r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z"></path>"#
            }
            Icon::Star => {
                r#"<path d="M11.05 2.93c.3-.92 1.6-.92 1.9 0l1.52 4.67a1 1 0 00.95.69h4.91c.97 0 1.37 1.24.59 1.81l-3.97 2.89a1 1 0 00-.37 1.12l1.52 4.67c.3.92-.76 1.69-1.54 1.12l-3.97-2.89a1 1 0 00-1.18 0l-3.97 2.89c-.78.57-1.84-.2-1.54-1.12l1.52-4.67a1 1 0 00-.37-1.12L2.08 10.1c-.78-.57-.38-1.81.59-1.81h4.91a1 1 0 00.95-.69l1.52-4.67z"></path>"#
            }
            Icon::Check => {
                r#"<path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z" clip-rule="evenodd"></path>"#
            }
        }
    }
}

/// Outline icon.
pub fn icon(icon: Icon, class_name: &str) -> String {
    format!(
        "<svg class=\"{}\" fill=\"none\" stroke=\"currentColor\" viewBox=\"0 0 24 24\">{}</svg>",
        escape_html(class_name),
        icon.path()
    )
}

/// Solid icon.
pub fn filled_icon(icon: Icon, class_name: &str) -> String {
    format!(
        "<svg class=\"{}\" fill=\"currentColor\" viewBox=\"0 0 24 24\">{}</svg>",
        escape_html(class_name),
        icon.path()
    )
}

fn check_recipe(recipe: &Recipe) -> Result<(), MarkupError> {
    if recipe.id == 0 {
        return Err(MarkupError::MalformedRecord {
            kind: "recipe",
            id: recipe.id,
            reason: "missing id",
        });
    }
    if recipe.name.trim().is_empty() {
        return Err(MarkupError::MalformedRecord {
            kind: "recipe",
            id: recipe.id,
            reason: "missing name",
        });
    }
    Ok(())
}

fn check_category(category: &Category) -> Result<(), MarkupError> {
    if category.id == 0 || category.name.trim().is_empty() {
        return Err(MarkupError::MalformedRecord {
            kind: "category",
            id: category.id,
            reason: if category.id == 0 {
                "missing id"
            } else {
                "missing name"
            },
        });
    }
    Ok(())
}

fn recipe_href(recipe: &Recipe) -> String {
    format!("recipe.html?id={}", recipe.id)
}

fn image_tag(src: &str, alt: &str, class_name: &str) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\" class=\"{}\" />",
        escape_html(src),
        escape_html(alt),
        class_name
    )
}

fn gradient_of<'a>(recipe: &'a Recipe, fallback: &'a str) -> &'a str {
    recipe
        .gradient
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .unwrap_or(fallback)
}

pub fn category_card(category: &Category) -> Result<String, MarkupError> {
    check_category(category)?;
    Ok(format!(
        concat!(
            "<a href=\"category.html?id={id}\" class=\"block\">",
            "<div class=\"bg-white border-2 border-gray-200 rounded-xl p-8 hover:border-red-600 hover:shadow-lg transition-all duration-300 cursor-pointer text-center group card-hover\">",
            "<div class=\"bg-red-50 group-hover:bg-red-100 w-20 h-20 rounded-full flex items-center justify-center mx-auto mb-4 transition-colors\">{icon}</div>",
            "<h3 class=\"font-bold text-gray-900 mb-2 text-lg\">{name}</h3>",
            "<p class=\"text-sm text-gray-600\">{count} recipes</p>",
            "</div></a>"
        ),
        id = category.id,
        icon = icon(Icon::Chef, "w-10 h-10 text-red-600"),
        name = escape_html(&category.name),
        count = category.count,
    ))
}

pub fn recipe_card(recipe: &Recipe, config: &SiteConfig) -> Result<String, MarkupError> {
    check_recipe(recipe)?;

    let (media_class, media) = match recipe.image_ref() {
        Some(image) => (
            String::new(),
            image_tag(
                &config.image_path(image),
                &recipe.name,
                "w-full h-full object-cover",
            ),
        ),
        None => (
            format!(
                " bg-gradient-to-br {}",
                escape_html(gradient_of(recipe, RECIPE_FALLBACK_GRADIENT))
            ),
            icon(Icon::Chef, "w-16 h-16 text-white opacity-40"),
        ),
    };

    Ok(format!(
        concat!(
            "<a href=\"{href}\" class=\"block\" aria-label=\"Open recipe {name}\">",
            "<div class=\"bg-white rounded-lg shadow-md hover:shadow-lg transition-all duration-300 overflow-hidden cursor-pointer group card-hover\" data-recipe-id=\"{id}\">",
            "<div class=\"relative h-48{media_class} flex items-center justify-center overflow-hidden\">{media}</div>",
            "<div class=\"p-4\">",
            "<h3 class=\"text-lg font-bold text-gray-900 mb-2 group-hover:text-red-600 transition-colors\">{name}</h3>",
            "<p class=\"text-sm text-gray-600 mb-3\">{category}</p>",
            "<div class=\"flex items-center justify-between text-sm text-gray-600\">",
            "<div class=\"flex items-center space-x-1\">{clock}<span>{time}</span></div>",
            "<div class=\"flex items-center space-x-1\">{star}<span class=\"font-semibold text-gray-900\">{rating}</span></div>",
            "</div></div></div></a>"
        ),
        href = recipe_href(recipe),
        id = recipe.id,
        name = escape_html(&recipe.name),
        media_class = media_class,
        media = media,
        category = escape_html(&recipe.category),
        clock = icon(Icon::Clock, "w-4 h-4"),
        time = escape_html(&recipe.time),
        star = filled_icon(Icon::Star, "w-4 h-4 text-yellow-500"),
        rating = recipe.rating_label(),
    ))
}

pub fn related_card(recipe: &Recipe, config: &SiteConfig) -> Result<String, MarkupError> {
    check_recipe(recipe)?;

    let media = match recipe.image_ref() {
        Some(image) => image_tag(
            &config.image_path(image),
            &recipe.name,
            "w-16 h-16 rounded-md object-cover",
        ),
        None => format!(
            "<div class=\"w-16 h-16 rounded-md flex items-center justify-center bg-gradient-to-br {}\">{}</div>",
            escape_html(gradient_of(recipe, RELATED_FALLBACK_GRADIENT)),
            icon(Icon::Chef, "w-8 h-8 text-white")
        ),
    };

    Ok(format!(
        concat!(
            "<div class=\"bg-white rounded-lg shadow-sm overflow-hidden group card-hover\">",
            "<a href=\"{href}\" class=\"block p-4\"><div class=\"flex items-center space-x-3\">{media}",
            "<div><h4 class=\"font-semibold text-gray-900\">{name}</h4>",
            "<div class=\"text-sm text-gray-500\">{time} \u{2022} {category}</div></div>",
            "</div></a></div>"
        ),
        href = recipe_href(recipe),
        media = media,
        name = escape_html(&recipe.name),
        time = escape_html(&recipe.time),
        category = escape_html(&recipe.category),
    ))
}

pub fn featured_main_card(recipe: &Recipe, config: &SiteConfig) -> Result<String, MarkupError> {
    check_recipe(recipe)?;

    let media = match recipe.image_ref() {
        Some(image) => image_tag(
            &config.image_path(image),
            &recipe.name,
            "w-full h-full object-cover",
        ),
        None => format!(
            "<div class=\"w-full h-full bg-gradient-to-br {} flex items-center justify-center\">{}</div>",
            escape_html(gradient_of(recipe, FEATURED_MAIN_FALLBACK_GRADIENT)),
            icon(Icon::Chef, "w-32 h-32 text-white opacity-40")
        ),
    };

    Ok(format!(
        concat!(
            "<div class=\"md:col-span-2\"><a href=\"{href}\" class=\"block\">",
            "<div class=\"bg-white rounded-lg shadow-md overflow-hidden cursor-pointer group\">",
            "<div class=\"relative h-96 overflow-hidden\">{media}",
            "<div class=\"absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/70 to-transparent p-6\">",
            "<span class=\"inline-block bg-red-600 text-white text-xs font-bold px-3 py-1 rounded mb-2\">FEATURED</span>",
            "<h2 class=\"text-3xl font-bold text-white mb-2\">{name}</h2>",
            "<p class=\"text-white text-sm mb-3\">{description}</p>",
            "<div class=\"flex items-center space-x-4 text-white text-sm\">",
            "<div class=\"flex items-center space-x-1\">{clock}<span>{time}</span></div>",
            "<div class=\"flex items-center space-x-1\">{star}<span>{rating}</span></div>",
            "</div></div></div></div></a></div>"
        ),
        href = recipe_href(recipe),
        media = media,
        name = escape_html(&recipe.name),
        description = escape_html(&recipe.description),
        clock = icon(Icon::Clock, "w-4 h-4"),
        time = escape_html(&recipe.time),
        star = filled_icon(Icon::Star, "w-4 h-4"),
        rating = recipe.rating_label(),
    ))
}

pub fn featured_side_card(recipe: &Recipe, config: &SiteConfig) -> Result<String, MarkupError> {
    check_recipe(recipe)?;

    let media = match recipe.image_ref() {
        Some(image) => image_tag(
            &config.image_path(image),
            &recipe.name,
            "w-full h-full object-cover",
        ),
        None => format!(
            "<div class=\"w-full h-full bg-gradient-to-br {} flex items-center justify-center\">{}</div>",
            escape_html(gradient_of(recipe, FEATURED_SIDE_FALLBACK_GRADIENT)),
            icon(Icon::Chef, "w-16 h-16 text-white opacity-40")
        ),
    };

    Ok(format!(
        concat!(
            "<a href=\"{href}\" class=\"block\">",
            "<div class=\"bg-white rounded-lg shadow-md overflow-hidden cursor-pointer group\">",
            "<div class=\"relative h-44 overflow-hidden\">{media}",
            "<div class=\"absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/70 to-transparent p-4\">",
            "<h3 class=\"text-lg font-bold text-white mb-1\">{name}</h3>",
            "<div class=\"flex items-center space-x-2 text-white text-xs\">{clock}<span>{time}</span></div>",
            "</div></div></div></a>"
        ),
        href = recipe_href(recipe),
        media = media,
        name = escape_html(&recipe.name),
        clock = icon(Icon::Clock, "w-3 h-3"),
        time = escape_html(&recipe.time),
    ))
}

pub fn ingredient_item(ingredient: &Ingredient) -> String {
    format!(
        "<li class=\"flex items-start\"><svg class=\"w-5 h-5 text-green-500 mr-2 mt-0.5\" fill=\"currentColor\" viewBox=\"0 0 20 20\">{}</svg><span class=\"text-gray-700\">{}</span></li>",
        Icon::Check.path(),
        escape_html(&ingredient.display_text())
    )
}

pub fn instruction_item(index: usize, step: &str) -> String {
    format!(
        "<li class=\"flex\"><span class=\"flex-shrink-0 w-8 h-8 bg-red-600 text-white rounded-full flex items-center justify-center font-bold mr-4\">{}</span><p class=\"text-gray-700 pt-1\">{}</p></li>",
        index + 1,
        escape_html(step)
    )
}

pub fn note_item(note: &str) -> String {
    format!("<li>{}</li>", escape_html(note))
}

pub fn error_block(message: &str) -> String {
    format!(
        "<div class=\"col-span-full text-center py-12\"><p class=\"text-red-600 font-semibold\">{}</p></div>",
        escape_html(message)
    )
}

pub fn not_found_block(message: &str) -> String {
    format!(
        "<div class=\"col-span-full text-center py-8 text-red-600\">{}</div>",
        escape_html(message)
    )
}

pub fn loading_block() -> String {
    "<div class=\"col-span-full flex justify-center items-center py-12\"><div class=\"animate-spin rounded-full h-12 w-12 border-b-2 border-red-600\"></div></div>".to_string()
}
