use crate::model::RecipeId;
use std::collections::HashMap;
use url::form_urlencoded;

/// Key under which a recipe card stores the clicked recipe id right before
/// navigating to the detail page.
pub const SELECTED_RECIPE_KEY: &str = "selectedRecipeId";

/// Short-lived storage that survives exactly one navigation.
pub trait HandoffStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryHandoff {
    values: HashMap<String, String>,
}

impl MemoryHandoff {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HandoffStore for MemoryHandoff {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Decoded query string of a page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Accepts `?id=3&x=y`, `id=3` or a full URL.
    pub fn parse(input: &str) -> Self {
        let raw = match input.split_once('?') {
            Some((_, query)) => query,
            None if input.contains('=') => input,
            None => "",
        };
        let raw = raw.split('#').next().unwrap_or_default();

        Self {
            pairs: form_urlencoded::parse(raw.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn positive_id(raw: &str) -> Option<RecipeId> {
    raw.trim().parse::<RecipeId>().ok().filter(|id| *id > 0)
}

/// Detail page identifier policy: a positive integer `id` from the query
/// string, else the handoff value, else `default_id`.
pub fn resolve_detail_id(
    query: &Query,
    handoff: &dyn HandoffStore,
    default_id: RecipeId,
) -> RecipeId {
    if let Some(id) = query.get("id").and_then(positive_id) {
        return id;
    }

    if let Some(id) = handoff
        .get(SELECTED_RECIPE_KEY)
        .as_deref()
        .and_then(positive_id)
    {
        tracing::debug!(id, "detail id taken from handoff value");
        return id;
    }

    default_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parse_shapes() {
        assert_eq!(Query::parse("?id=3").get("id"), Some("3"));
        assert_eq!(Query::parse("id=4&x=y").get("x"), Some("y"));
        assert_eq!(
            Query::parse("https://example.github.io/cooking/recipe.html?id=12#top").get("id"),
            Some("12")
        );
        assert_eq!(Query::parse("recipe.html").get("id"), None);
        assert_eq!(Query::parse("?name=Som%20Tum").get("name"), Some("Som Tum"));
    }

    #[test]
    fn test_query_id_wins() {
        let mut handoff = MemoryHandoff::new();
        handoff.set(SELECTED_RECIPE_KEY, "7".to_string());
        assert_eq!(resolve_detail_id(&Query::parse("?id=3"), &handoff, 1), 3);
    }

    #[test]
    fn test_non_numeric_query_falls_back_to_handoff() {
        let mut handoff = MemoryHandoff::new();
        handoff.set(SELECTED_RECIPE_KEY, "7".to_string());
        assert_eq!(resolve_detail_id(&Query::parse("?id=abc"), &handoff, 1), 7);
        assert_eq!(resolve_detail_id(&Query::parse("?id=0"), &handoff, 1), 7);
    }

    #[test]
    fn test_default_when_nothing_resolves() {
        let mut handoff = MemoryHandoff::new();
        assert_eq!(resolve_detail_id(&Query::default(), &handoff, 1), 1);

        handoff.set(SELECTED_RECIPE_KEY, "not-a-number".to_string());
        assert_eq!(resolve_detail_id(&Query::default(), &handoff, 1), 1);
    }

    #[test]
    fn test_handoff_remove() {
        let mut handoff = MemoryHandoff::new();
        handoff.set(SELECTED_RECIPE_KEY, "2".to_string());
        handoff.remove(SELECTED_RECIPE_KEY);
        assert_eq!(handoff.get(SELECTED_RECIPE_KEY), None);
    }
}
