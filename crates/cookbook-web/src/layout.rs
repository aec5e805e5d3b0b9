//! Page layouts.
//!
//! A layout is an HTML body template with `{{slotId}}` tokens plus the spec
//! of every slot element. The document created from a layout owns one
//! element per slot; rendering splices each element's markup in place of its
//! token. Ids that are anchor targets but not slots (section wrappers) are
//! listed in `anchors`.

use crate::document::Content;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Recipe,
}

/// Position of a `{{key}}` token inside a template. `len` covers the braces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TemplateSlot {
    pub position: usize,
    pub len: usize,
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct SlotSpec {
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub content: Content,
}

impl SlotSpec {
    pub fn new(id: &str, tag: &str) -> Self {
        Self {
            id: id.to_string(),
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: Vec::new(),
            content: Content::Empty,
        }
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.content = Content::Text(text.to_string());
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.content = Content::Html(html.to_string());
        self
    }

    pub fn children(mut self, ids: &[&str]) -> Self {
        self.content = Content::Slots(ids.iter().map(|id| id.to_string()).collect());
        self
    }
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub kind: PageKind,
    pub title: String,
    pub template: String,
    pub slots: Vec<SlotSpec>,
    pub anchors: Vec<String>,
}

const NAV_LINKS: &str = r##"<div class="max-w-7xl mx-auto px-4 h-16 flex items-center justify-between"><a href="index.html" class="text-2xl font-bold text-red-600">Cookbook</a><div class="space-x-6 text-gray-700"><a href="#featured" class="hover:text-red-600">Featured</a><a href="#categories" class="hover:text-red-600">Categories</a><a href="#popular" class="hover:text-red-600">Popular</a><a href="#newsletter" class="hover:text-red-600">Newsletter</a></div></div>"##;

const HOME_TEMPLATE: &str = r##"{{nav}}
<header class="bg-red-50 py-12"><div class="max-w-3xl mx-auto px-4 text-center"><h1 class="text-4xl font-bold text-gray-900 mb-6">Find your next favourite dish</h1>{{searchInput}}</div></header>
<main class="max-w-7xl mx-auto px-4">
<section id="featured" class="py-12">{{featuredSection}}</section>
<section id="categories" class="py-12"><h2 class="text-2xl font-bold text-gray-900 mb-6">Categories</h2>{{categoriesGrid}}</section>
<section id="popular" class="py-12"><h2 class="text-2xl font-bold text-gray-900 mb-6">Popular recipes</h2>{{popularGrid}}</section>
</main>
<section id="newsletter" class="bg-red-600 py-12"><div class="max-w-xl mx-auto px-4 text-center"><h2 class="text-2xl font-bold text-white mb-4">Get new recipes every week</h2><div class="flex gap-2">{{newsletterEmail}}{{newsletterButton}}</div></div></section>"##;

const RECIPE_TEMPLATE: &str = r##"{{nav}}
<main class="max-w-6xl mx-auto px-4 py-8">
<nav class="text-sm text-gray-500 mb-6 flex items-center space-x-2"><a href="index.html">Home</a><span>/</span>{{recipeCategoryLink}}<span>/</span>{{recipeName}}</nav>
<div class="relative h-96 rounded-xl overflow-hidden mb-8">{{recipeHero}}</div>
<div class="grid md:grid-cols-3 gap-8">
<article class="md:col-span-2">
{{recipeCategory}}{{recipeTitle}}{{recipeDescription}}
<div class="flex items-center space-x-2 mb-6">{{recipeThumb}}<span class="text-yellow-500">&#9733;</span>{{recipeRating}}</div>
<section id="ingredients" class="mb-8"><h2 class="text-2xl font-bold mb-4">Ingredients</h2>{{ingredientsList}}</section>
<section id="instructions" class="mb-8"><h2 class="text-2xl font-bold mb-4">Instructions</h2>{{instructionsList}}</section>
{{tipsSection}}
</article>
<aside class="space-y-4 bg-white rounded-lg shadow-md p-6 h-fit">
<div><span class="text-gray-500">Time</span> {{recipeTime}}</div>
<div><span class="text-gray-500">Servings</span> {{recipeServings}}</div>
<div><span class="text-gray-500">Difficulty</span> {{recipeDifficulty}}</div>
</aside>
</div>
<section id="related" class="py-12"><h2 class="text-2xl font-bold text-gray-900 mb-6">Related recipes</h2>{{relatedRecipes}}</section>
</main>"##;

fn nav_slot() -> SlotSpec {
    SlotSpec::new("nav", "nav")
        .class("bg-white sticky top-0 z-40 transition-shadow")
        .html(NAV_LINKS)
}

impl Layout {
    pub fn home() -> Self {
        Self {
            kind: PageKind::Home,
            title: "Cookbook - Recipes".to_string(),
            template: HOME_TEMPLATE.to_string(),
            slots: vec![
                nav_slot(),
                SlotSpec::new("searchInput", "input")
                    .class("w-full rounded-lg border border-gray-300 px-4 py-3")
                    .attr("type", "search")
                    .attr("placeholder", "Search recipes or categories"),
                SlotSpec::new("featuredSection", "div").class("grid md:grid-cols-3 gap-6"),
                SlotSpec::new("categoriesGrid", "div")
                    .class("grid grid-cols-2 md:grid-cols-4 gap-6"),
                SlotSpec::new("popularGrid", "div")
                    .class("grid grid-cols-1 md:grid-cols-3 lg:grid-cols-4 gap-6"),
                SlotSpec::new("newsletterEmail", "input")
                    .class("flex-1 rounded-lg px-4 py-3")
                    .attr("type", "email")
                    .attr("placeholder", "you@example.com"),
                SlotSpec::new("newsletterButton", "button")
                    .class("bg-white text-red-600 font-bold px-6 py-3 rounded-lg")
                    .text("Subscribe"),
            ],
            anchors: vec![
                "featured".to_string(),
                "categories".to_string(),
                "popular".to_string(),
                "newsletter".to_string(),
            ],
        }
    }

    pub fn recipe() -> Self {
        Self {
            kind: PageKind::Recipe,
            title: "Cookbook - Recipe".to_string(),
            template: RECIPE_TEMPLATE.to_string(),
            slots: vec![
                nav_slot(),
                SlotSpec::new("recipeCategoryLink", "a")
                    .class("hover:text-red-600")
                    .attr("href", "category.html"),
                SlotSpec::new("recipeName", "span").class("text-gray-900"),
                SlotSpec::new("recipeHero", "img")
                    .class("w-full h-full object-cover")
                    .attr("alt", ""),
                SlotSpec::new("recipeCategory", "span")
                    .class("inline-block bg-red-100 text-red-600 text-xs font-bold px-3 py-1 rounded mb-2"),
                SlotSpec::new("recipeTitle", "h1").class("text-4xl font-bold text-gray-900 mb-4"),
                SlotSpec::new("recipeDescription", "p").class("text-gray-600 mb-6"),
                SlotSpec::new("recipeThumb", "img")
                    .class("w-10 h-10 rounded-full object-cover")
                    .attr("alt", "")
                    .attr("data-placeholder", "gradient"),
                SlotSpec::new("recipeRating", "span").class("font-semibold text-gray-900"),
                SlotSpec::new("ingredientsList", "ul").class("space-y-3"),
                SlotSpec::new("instructionsList", "ol").class("space-y-4"),
                SlotSpec::new("tipsSection", "div")
                    .class("bg-yellow-50 rounded-lg p-6 hidden")
                    .children(&["tipsHeading", "tipsList"]),
                SlotSpec::new("tipsHeading", "h3")
                    .class("font-bold text-gray-900 mb-2")
                    .text("Tips"),
                SlotSpec::new("tipsList", "ul").class("list-disc pl-5 space-y-1 text-gray-700"),
                SlotSpec::new("recipeTime", "span").class("font-semibold"),
                SlotSpec::new("recipeServings", "span").class("font-semibold"),
                SlotSpec::new("recipeDifficulty", "span").class("font-semibold"),
                SlotSpec::new("relatedRecipes", "div")
                    .class("grid grid-cols-1 md:grid-cols-3 gap-6"),
            ],
            anchors: vec![
                "ingredients".to_string(),
                "instructions".to_string(),
                "related".to_string(),
            ],
        }
    }

    /// Drops a slot. Its token stays in the template and renders empty.
    pub fn without_slot(mut self, id: &str) -> Self {
        self.slots.retain(|slot| slot.id != id);
        self
    }

    pub fn template_slots(&self) -> Vec<TemplateSlot> {
        extract_slots(&self.template)
    }
}

pub fn extract_slots(html: &str) -> Vec<TemplateSlot> {
    let mut out = Vec::new();
    let bytes = html.as_bytes();
    let mut i = 0usize;
    while i + 3 < bytes.len() {
        if bytes[i] == b'{' && bytes[i + 1] == b'{' {
            let start = i + 2;
            let mut j = start;
            let mut closed = false;
            while j + 1 < bytes.len() {
                if bytes[j] == b'}' && bytes[j + 1] == b'}' {
                    let key = html[start..j].trim().to_string();
                    if !key.is_empty() {
                        out.push(TemplateSlot {
                            position: i,
                            len: j + 2 - i,
                            key,
                        });
                    }
                    i = j + 2;
                    closed = true;
                    break;
                }
                j += 1;
            }
            if closed {
                continue;
            }
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slot_extraction() {
        let slots = extract_slots("<h1>{{ title }}</h1><p>{{body}}</p>");
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].key, "title");
        assert_eq!(slots[0].position, 4);
        assert_eq!(slots[0].len, "{{ title }}".len());
        assert_eq!(slots[1].key, "body");
    }

    #[test]
    fn test_adjacent_tokens() {
        let slots = extract_slots("{{a}}{{b}}");
        let keys: Vec<&str> = slots.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_every_top_level_token_has_a_slot() {
        for layout in [Layout::home(), Layout::recipe()] {
            let declared: HashSet<&str> = layout.slots.iter().map(|s| s.id.as_str()).collect();
            for token in layout.template_slots() {
                assert!(
                    declared.contains(token.key.as_str()),
                    "token {} has no slot in {:?}",
                    token.key,
                    layout.kind
                );
            }
        }
    }

    #[test]
    fn test_without_slot() {
        let layout = Layout::recipe().without_slot("recipeTitle");
        assert!(layout.slots.iter().all(|s| s.id != "recipeTitle"));
        assert!(layout.template.contains("{{recipeTitle}}"));
    }
}
