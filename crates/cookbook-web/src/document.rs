//! Headless page document.
//!
//! Stands in for the browser DOM: a fixed set of slot elements addressed by
//! id, the toast overlays appended to the body, and the scroll/navigation
//! requests made by event handlers. Renderers only ever touch slots through
//! the guarded accessors here, so a missing slot is a `false`/`None`, never a
//! panic.

use crate::layout::{Layout, PageKind};
use crate::toast::Toast;
use cookbook_core::{CategoryId, RecipeId};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

const VOID_TAGS: [&str; 2] = ["input", "img"];

pub(crate) const BASE_CSS: &str = r#"
.reveal-item { opacity: 0; transform: translateY(12px); transition: opacity .4s ease, transform .4s ease; }
.reveal-item.fade-in, .fade-in { opacity: 1; transform: none; }
.card-hover:hover { transform: translateY(-4px); }
.hidden { display: none; }
"#;

/// Stable tag of a rendered card. Click dispatch resolves records through
/// this key, never through the card's position among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKey {
    Category(CategoryId),
    Recipe(RecipeId),
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKey::Category(id) => write!(f, "category:{id}"),
            CardKey::Recipe(id) => write!(f, "recipe:{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem {
    pub key: CardKey,
    pub markup: String,
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Html(String),
    Items(Vec<RenderedItem>),
    Slots(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub content: Content,
    generation: u64,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub target: String,
    pub behavior: &'static str,
    pub block: &'static str,
}

#[derive(Debug, Clone)]
pub struct Document {
    layout: Layout,
    slots: HashMap<String, Element>,
    toasts: Vec<Toast>,
    scroll: Option<ScrollRequest>,
    navigation: Option<String>,
}

impl Document {
    pub fn new(layout: Layout) -> Self {
        let slots = layout
            .slots
            .iter()
            .map(|spec| {
                (
                    spec.id.clone(),
                    Element {
                        tag: spec.tag.clone(),
                        classes: spec.classes.clone(),
                        attrs: spec.attrs.iter().cloned().collect(),
                        content: spec.content.clone(),
                        generation: 0,
                    },
                )
            })
            .collect();

        Self {
            layout,
            slots,
            toasts: Vec::new(),
            scroll: None,
            navigation: None,
        }
    }

    pub fn kind(&self) -> PageKind {
        self.layout.kind
    }

    pub fn has_slot(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// Anything an in-page `#anchor` can scroll to.
    pub fn has_target(&self, id: &str) -> bool {
        self.has_slot(id) || self.layout.anchors.iter().any(|anchor| anchor == id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.slots.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.slots.get_mut(id)
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.set_content(id, Content::Text(text.to_string()))
    }

    pub fn set_html(&mut self, id: &str, html: String) -> bool {
        self.set_content(id, Content::Html(html))
    }

    pub fn clear(&mut self, id: &str) -> bool {
        self.set_content(id, Content::Empty)
    }

    fn set_content(&mut self, id: &str, content: Content) -> bool {
        match self.slots.get_mut(id) {
            Some(element) => {
                element.content = content;
                element.generation += 1;
                true
            }
            None => false,
        }
    }

    /// Replaces the slot content with keyed items. Returns the new render
    /// generation, which reveal timers carry so a re-render cancels them.
    pub fn set_items(&mut self, id: &str, items: Vec<RenderedItem>) -> Option<u64> {
        let element = self.slots.get_mut(id)?;
        element.content = Content::Items(items);
        element.generation += 1;
        Some(element.generation)
    }

    /// Marks item `index` of slot `id` visible if the slot still shows the
    /// render `generation`.
    pub fn reveal(&mut self, id: &str, generation: u64, index: usize) -> bool {
        let Some(element) = self.slots.get_mut(id) else {
            return false;
        };
        if element.generation != generation {
            return false;
        }
        match &mut element.content {
            Content::Items(items) => match items.get_mut(index) {
                Some(item) => {
                    item.revealed = true;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    pub fn card_keys(&self, id: &str) -> Vec<CardKey> {
        match self.slots.get(id).map(|e| &e.content) {
            Some(Content::Items(items)) => items.iter().map(|item| item.key).collect(),
            _ => Vec::new(),
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        match self.slots.get(id).map(|e| &e.content) {
            Some(Content::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        let element = self.slots.get(id)?;
        let mut out = String::new();
        self.write_content(element, &mut out, 0);
        Some(out)
    }

    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.slots
            .get(id)
            .and_then(|element| element.attrs.get(name))
            .map(String::as_str)
    }

    pub fn set_attr(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.slots.get_mut(id) {
            Some(element) => {
                element.attrs.insert(name.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.slots
            .get(id)
            .is_some_and(|element| element.has_class(class))
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        match self.slots.get_mut(id) {
            Some(element) => {
                element.add_class(class);
                true
            }
            None => false,
        }
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> bool {
        match self.slots.get_mut(id) {
            Some(element) => {
                element.remove_class(class);
                true
            }
            None => false,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub(crate) fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub(crate) fn toast_mut(&mut self, id: u64) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|toast| toast.id == id)
    }

    pub(crate) fn remove_toast(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    pub fn request_scroll(&mut self, target: &str) {
        self.scroll = Some(ScrollRequest {
            target: target.to_string(),
            behavior: "smooth",
            block: "start",
        });
    }

    pub fn scroll_request(&self) -> Option<&ScrollRequest> {
        self.scroll.as_ref()
    }

    pub fn navigate(&mut self, href: String) {
        self.navigation = Some(href);
    }

    pub fn pending_navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }

    /// Full HTML page: document shell, the layout template with every slot
    /// spliced in, then the toast overlays at the end of the body.
    pub fn render(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!(
            "<title>{}</title>\n",
            escape_html(&self.layout.title)
        ));
        html.push_str("<script src=\"https://cdn.tailwindcss.com\"></script>\n");
        html.push_str(&format!("<style>{}</style>\n", BASE_CSS));
        html.push_str("</head>\n<body class=\"bg-gray-50\">\n");
        html.push_str(&self.render_body());
        for toast in &self.toasts {
            html.push_str(&toast.to_html());
        }
        html.push_str("\n</body>\n</html>");
        html
    }

    fn render_body(&self) -> String {
        let template = &self.layout.template;
        let mut out = String::with_capacity(template.len() * 2);
        let mut cursor = 0usize;
        for slot in self.layout.template_slots() {
            out.push_str(&template[cursor..slot.position]);
            if let Some(element) = self.slots.get(&slot.key) {
                self.write_element(&slot.key, element, &mut out, 0);
            }
            cursor = slot.position + slot.len;
        }
        out.push_str(&template[cursor..]);
        out
    }

    fn write_element(&self, id: &str, element: &Element, out: &mut String, depth: usize) {
        out.push('<');
        out.push_str(&element.tag);
        out.push_str(&format!(" id=\"{}\"", escape_html(id)));
        if !element.classes.is_empty() {
            out.push_str(&format!(
                " class=\"{}\"",
                escape_html(&element.classes.join(" "))
            ));
        }
        for (name, value) in &element.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }

        if VOID_TAGS.contains(&element.tag.as_str()) {
            out.push_str(" />");
            return;
        }

        out.push('>');
        self.write_content(element, out, depth);
        out.push_str(&format!("</{}>", element.tag));
    }

    fn write_content(&self, element: &Element, out: &mut String, depth: usize) {
        match &element.content {
            Content::Empty => {}
            Content::Text(text) => out.push_str(&escape_html(text)),
            Content::Html(html) => out.push_str(html),
            Content::Items(items) => {
                for item in items {
                    let class = if item.revealed {
                        "reveal-item fade-in"
                    } else {
                        "reveal-item"
                    };
                    out.push_str(&format!(
                        "<div class=\"{}\" data-card=\"{}\">{}</div>",
                        class, item.key, item.markup
                    ));
                }
            }
            Content::Slots(children) => {
                // Stops a slot that lists itself as a child.
                if depth > 8 {
                    return;
                }
                for child in children {
                    if let Some(child_element) = self.slots.get(child) {
                        self.write_element(child, child_element, out, depth + 1);
                    }
                }
            }
        }
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_key_attribute_form() {
        assert_eq!(CardKey::Recipe(12).to_string(), "recipe:12");
        assert_eq!(CardKey::Category(3).to_string(), "category:3");
    }

    #[test]
    fn test_missing_slot_updates_are_noops() {
        let mut doc = Document::new(Layout::home());
        assert!(!doc.set_text("recipeTitle", "Pad Thai"));
        assert!(!doc.add_class("recipeTitle", "x"));
        assert_eq!(doc.set_items("recipeTitle", Vec::new()), None);
        assert!(doc.set_text("newsletterButton", "Join"));
    }

    #[test]
    fn test_render_splices_slots_and_escapes_text() {
        let mut doc = Document::new(Layout::recipe());
        doc.set_text("recipeTitle", "Pad <Thai> {{nav}}");
        let html = doc.render();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title>Cookbook - Recipe</title>"));
        assert!(html.contains("<h1 id=\"recipeTitle\""));
        assert!(html.contains("Pad &lt;Thai&gt; {{nav}}"));
        assert!(!html.contains("{{recipeTitle}}"));
        assert!(html.contains("<img id=\"recipeHero\""));
    }

    #[test]
    fn test_nested_slots_render_inside_parent() {
        let mut doc = Document::new(Layout::recipe());
        doc.set_html("tipsList", "<li>Soak the noodles</li>".to_string());
        let section = doc.inner_html("tipsSection").expect("tips section exists");
        assert!(section.contains("<h3 id=\"tipsHeading\""));
        assert!(section.contains("<li>Soak the noodles</li>"));
    }

    #[test]
    fn test_reveal_ignores_stale_generation() {
        let mut doc = Document::new(Layout::home());
        let item = |id| RenderedItem {
            key: CardKey::Recipe(id),
            markup: String::new(),
            revealed: false,
        };
        let first = doc
            .set_items("popularGrid", vec![item(1), item(2)])
            .expect("slot exists");
        let second = doc
            .set_items("popularGrid", vec![item(3)])
            .expect("slot exists");

        assert!(!doc.reveal("popularGrid", first, 0));
        assert!(doc.reveal("popularGrid", second, 0));
        assert!(!doc.reveal("popularGrid", second, 1));
        assert!(doc
            .inner_html("popularGrid")
            .expect("grid exists")
            .contains("class=\"reveal-item fade-in\" data-card=\"recipe:3\""));
    }

    #[test]
    fn test_anchor_targets_include_sections() {
        let doc = Document::new(Layout::home());
        assert!(doc.has_target("categories"));
        assert!(doc.has_target("popularGrid"));
        assert!(!doc.has_target("nowhere"));
    }
}
