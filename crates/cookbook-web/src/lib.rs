//! Page engine for the cookbook site.
//!
//! A page is a [`Document`] built from one of the two [`Layout`]s. Renderers
//! fill its slots from the shared [`cookbook_core::Catalog`]; the
//! [`PageRuntime`] owns the document together with the search state, the
//! timer queue and the toast notifier, and applies [`UiEvent`]s to it.

pub mod config;
pub mod controller;
pub mod detail;
pub mod document;
pub mod error;
pub mod layout;
pub mod markup;
pub mod render;
pub mod timer;
pub mod toast;

#[cfg(test)]
pub(crate) mod testdata;

pub use config::{CONFIG_FILE_NAME, SiteConfig};
pub use controller::{EventOutcome, PageRuntime, UiEvent};
pub use detail::{DetailOutcome, init_detail_page, render_detail, render_related};
pub use document::{CardKey, Content, Document, ScrollRequest, escape_html};
pub use error::{MarkupError, SiteError};
pub use layout::{Layout, PageKind};
pub use render::{Rendered, render_categories, render_featured, render_recipes};
pub use timer::{TimerQueue, TimerTask};
pub use toast::{Notifier, Toast, ToastKind};
