use cookbook_core::{CatalogError, CategoryId, RecipeId};
use thiserror::Error;

/// A record the markup builder cannot turn into a card.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("malformed {kind} record (id {id}): {reason}")]
    MalformedRecord {
        kind: &'static str,
        id: u32,
        reason: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("invalid site configuration: {0}")]
    Config(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no recipe with id {0}")]
    UnknownRecipe(RecipeId),

    #[error("no category with id {0}")]
    UnknownCategory(CategoryId),

    #[error(transparent)]
    Markup(#[from] MarkupError),
}
