//! Page runtime.
//!
//! [`PageRuntime`] owns everything a page mutates: the document, the search
//! state, the timer queue and the toast notifier. Handlers take an explicit
//! `now`, so the same code runs under the async loop in [`PageRuntime::run`]
//! and under tests that step time by hand with [`PageRuntime::advance`].

use crate::config::SiteConfig;
use crate::detail::{DetailOutcome, init_detail_page};
use crate::document::{CardKey, Document};
use crate::error::SiteError;
use crate::layout::Layout;
use crate::render::{self, Rendered};
use crate::timer::{TimerQueue, TimerTask};
use crate::toast::{Notifier, ToastKind};
use cookbook_core::{
    Catalog, CategoryFilter, HandoffStore, Query, Recipe, SELECTED_RECIPE_KEY, SearchState,
    filter, filter_by_category, is_valid_email,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;

pub const WELCOME_MESSAGE: &str = "Welcome to the cookbook!";
pub const FAULT_MESSAGE: &str = "Something went wrong, please try again";
pub const NO_MATCH_TOAST: &str = "No matching recipes";
pub const EMAIL_MISSING: &str = "Please enter your email";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const SUBSCRIBED: &str = "Thanks for subscribing!";

const SEARCH_INPUT: &str = "searchInput";
const POPULAR_GRID: &str = "popularGrid";
const CATEGORIES_GRID: &str = "categoriesGrid";
const NEWSLETTER_EMAIL: &str = "newsletterEmail";
const NAV: &str = "nav";
const NAV_SHADOW: &str = "shadow-lg";

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Text typed into the search box; `value` is the whole input value.
    SearchInput { value: String },
    SearchKey { key: String },
    CardClick { key: CardKey },
    AnchorClick { href: String },
    NewsletterInput { value: String },
    NewsletterSubmit,
    Scroll { y: f64 },
    Resize { width: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    /// Handled, and the browser's default action must not run.
    DefaultPrevented,
    Ignored,
    /// The handler failed; the generic error toast was shown.
    Failed,
}

pub struct PageRuntime {
    doc: Document,
    catalog: Arc<Catalog>,
    config: SiteConfig,
    search: SearchState,
    timers: TimerQueue,
    notifier: Notifier,
    handoff: Box<dyn HandoffStore + Send>,
    debounce_generation: u64,
}

impl PageRuntime {
    pub fn new(
        layout: Layout,
        catalog: Arc<Catalog>,
        config: SiteConfig,
        handoff: Box<dyn HandoffStore + Send>,
    ) -> Self {
        let search = SearchState::new(&catalog.popular());
        let notifier = Notifier::new(&config);
        Self {
            doc: Document::new(layout),
            catalog,
            config,
            search,
            timers: TimerQueue::new(),
            notifier,
            handoff,
            debounce_generation: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn handoff(&self) -> &dyn HandoffStore {
        self.handoff.as_ref()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Home page-ready: featured section, categories and popular grid, then
    /// the delayed welcome toast.
    pub fn init_home(&mut self, now: Instant) {
        let catalog = Arc::clone(&self.catalog);
        render::show_loading(&mut self.doc, CATEGORIES_GRID);
        render::show_loading(&mut self.doc, POPULAR_GRID);

        render::render_featured(&mut self.doc, &catalog, &self.config);

        let rendered = render::render_categories(&mut self.doc, &catalog.categories);
        render::schedule_reveal(
            &mut self.timers,
            CATEGORIES_GRID,
            rendered,
            self.config.category_reveal_step(),
            now,
        );

        let popular = catalog.popular();
        let rendered = render::render_recipes(&mut self.doc, POPULAR_GRID, &popular, &self.config);
        render::schedule_reveal(
            &mut self.timers,
            POPULAR_GRID,
            rendered,
            self.config.recipe_reveal_step(),
            now,
        );

        if self.doc.has_slot(POPULAR_GRID) {
            self.timers
                .schedule(now + self.config.welcome_delay(), TimerTask::Welcome);
        }
        tracing::info!(
            categories = catalog.categories.len(),
            popular = popular.len(),
            "home page initialized"
        );
    }

    /// Detail page-ready for the page URL's `query`.
    pub fn init_detail(&mut self, query: &Query, now: Instant) -> DetailOutcome {
        let catalog = Arc::clone(&self.catalog);
        let outcome = init_detail_page(
            &mut self.doc,
            &catalog,
            query,
            self.handoff.as_mut(),
            &self.config,
        );
        if let DetailOutcome::Rendered { related, .. } = outcome {
            render::schedule_reveal(
                &mut self.timers,
                "relatedRecipes",
                related,
                self.config.recipe_reveal_step(),
                now,
            );
        }
        outcome
    }

    /// Applies one event. Handler errors stop here: they are logged and shown
    /// as the generic error toast, and the page keeps what it had rendered.
    pub fn dispatch(&mut self, event: UiEvent, now: Instant) -> EventOutcome {
        tracing::debug!(?event, "dispatch");
        match self.handle(event, now) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, "event handler failed");
                self.notifier.notify(
                    &mut self.doc,
                    &mut self.timers,
                    FAULT_MESSAGE,
                    ToastKind::Error,
                    now,
                );
                EventOutcome::Failed
            }
        }
    }

    fn handle(&mut self, event: UiEvent, now: Instant) -> Result<EventOutcome, SiteError> {
        match event {
            UiEvent::SearchInput { value } => {
                self.doc.set_attr(SEARCH_INPUT, "value", &value);
                self.search.search_term = value;
                self.debounce_generation += 1;
                self.timers.schedule(
                    now + self.config.search_debounce(),
                    TimerTask::SearchDebounce {
                        generation: self.debounce_generation,
                    },
                );
                Ok(EventOutcome::Handled)
            }
            UiEvent::SearchKey { key } => {
                if key != "Enter" {
                    return Ok(EventOutcome::Ignored);
                }
                // Any armed debounce is now stale.
                self.debounce_generation += 1;
                self.perform_search(now);
                Ok(EventOutcome::Handled)
            }
            UiEvent::CardClick { key } => self.handle_card_click(key, now),
            UiEvent::AnchorClick { href } => Ok(self.handle_anchor(&href)),
            UiEvent::NewsletterInput { value } => {
                if self.doc.set_attr(NEWSLETTER_EMAIL, "value", &value) {
                    Ok(EventOutcome::Handled)
                } else {
                    Ok(EventOutcome::Ignored)
                }
            }
            UiEvent::NewsletterSubmit => Ok(self.handle_newsletter(now)),
            UiEvent::Scroll { y } => {
                let changed = if y > self.config.nav_shadow_threshold {
                    self.doc.add_class(NAV, NAV_SHADOW)
                } else {
                    self.doc.remove_class(NAV, NAV_SHADOW)
                };
                Ok(if changed {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                })
            }
            UiEvent::Resize { width } => {
                tracing::debug!(width, "window resized");
                Ok(EventOutcome::Handled)
            }
        }
    }

    fn handle_card_click(&mut self, key: CardKey, now: Instant) -> Result<EventOutcome, SiteError> {
        let catalog = Arc::clone(&self.catalog);
        match key {
            CardKey::Category(id) => {
                let category = catalog
                    .category(id)
                    .ok_or(SiteError::UnknownCategory(id))?;
                tracing::info!(id, name = %category.name, "category selected");
                self.search.current_category = CategoryFilter::Id(id);
                self.notifier.notify(
                    &mut self.doc,
                    &mut self.timers,
                    &format!("You selected category: {}", category.name),
                    ToastKind::Info,
                    now,
                );
                let matches = self.apply_filters(&catalog);
                self.show_matches(&matches, now);
                Ok(EventOutcome::Handled)
            }
            CardKey::Recipe(id) => {
                let recipe = catalog.recipe(id).ok_or(SiteError::UnknownRecipe(id))?;
                tracing::info!(id, name = %recipe.name, "recipe selected");
                self.notifier.notify(
                    &mut self.doc,
                    &mut self.timers,
                    &format!("Opening recipe: {}", recipe.name),
                    ToastKind::Info,
                    now,
                );
                self.handoff.set(SELECTED_RECIPE_KEY, id.to_string());
                self.doc.navigate(format!("recipe.html?id={id}"));
                Ok(EventOutcome::Handled)
            }
        }
    }

    fn handle_anchor(&mut self, href: &str) -> EventOutcome {
        let Some(target) = href.strip_prefix('#') else {
            return EventOutcome::Ignored;
        };
        if self.doc.has_target(target) {
            self.doc.request_scroll(target);
        }
        EventOutcome::DefaultPrevented
    }

    fn handle_newsletter(&mut self, now: Instant) -> EventOutcome {
        if !self.doc.has_slot(NEWSLETTER_EMAIL) {
            return EventOutcome::Ignored;
        }
        let email = self
            .doc
            .attr(NEWSLETTER_EMAIL, "value")
            .unwrap_or_default()
            .to_string();

        let (message, kind) = if email.is_empty() {
            (EMAIL_MISSING, ToastKind::Warning)
        } else if !is_valid_email(&email) {
            (EMAIL_INVALID, ToastKind::Warning)
        } else {
            tracing::debug!("newsletter subscription");
            self.doc.set_attr(NEWSLETTER_EMAIL, "value", "");
            (SUBSCRIBED, ToastKind::Success)
        };
        self.notifier
            .notify(&mut self.doc, &mut self.timers, message, kind, now);
        EventOutcome::Handled
    }

    /// Filters the popular recipes by the current category, then by the
    /// stored term, and re-renders the grid with a result toast.
    pub fn perform_search(&mut self, now: Instant) {
        let catalog = Arc::clone(&self.catalog);
        let matches = self.apply_filters(&catalog);
        tracing::info!(
            term = %self.search.search_term,
            found = matches.len(),
            "search"
        );

        self.show_matches(&matches, now);
        let (message, kind) = if matches.is_empty() {
            (NO_MATCH_TOAST.to_string(), ToastKind::Warning)
        } else {
            (format!("Found {} recipes", matches.len()), ToastKind::Info)
        };
        self.notifier
            .notify(&mut self.doc, &mut self.timers, &message, kind, now);
    }

    fn apply_filters<'a>(&mut self, catalog: &'a Catalog) -> Vec<&'a Recipe> {
        let popular = catalog.popular();
        let scoped = filter_by_category(
            self.search.current_category,
            &catalog.categories,
            &popular,
        );
        let matches = filter(&self.search.search_term, &scoped);
        self.search.filtered = matches.iter().map(|recipe| recipe.id).collect();
        matches
    }

    fn show_matches(&mut self, matches: &[&Recipe], now: Instant) {
        if matches.is_empty() {
            let term = self.search.search_term.trim();
            let category = match self.search.current_category {
                CategoryFilter::Id(id) if term.is_empty() => self.catalog.category(id),
                _ => None,
            };
            let message = match category {
                Some(category) => format!("No recipes in {}", category.name),
                None => format!("No recipes found for \"{}\"", self.search.search_term),
            };
            render::show_error(&mut self.doc, POPULAR_GRID, &message);
            return;
        }
        let rendered: Rendered =
            render::render_recipes(&mut self.doc, POPULAR_GRID, matches, &self.config);
        render::schedule_reveal(
            &mut self.timers,
            POPULAR_GRID,
            rendered,
            self.config.recipe_reveal_step(),
            now,
        );
    }

    /// Fires every timer due at or before `now`, each at its own deadline.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some((at, task)) = self.timers.pop_due(now) {
            self.fire(task, at);
            fired += 1;
        }
        fired
    }

    /// Runs the timer queue dry. Timers scheduled while draining fire too.
    pub fn drain(&mut self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.timers.next_deadline() {
            fired += self.advance(deadline);
        }
        fired
    }

    fn fire(&mut self, task: TimerTask, at: Instant) {
        match task {
            TimerTask::Reveal {
                container,
                generation,
                index,
            } => {
                self.doc.reveal(&container, generation, index);
            }
            TimerTask::SearchDebounce { generation } => {
                if generation == self.debounce_generation {
                    self.perform_search(at);
                }
            }
            TimerTask::ToastFade { toast } => {
                self.notifier.fade(&mut self.doc, &mut self.timers, toast, at);
            }
            TimerTask::ToastRemove { toast } => {
                self.notifier.remove(&mut self.doc, toast);
            }
            TimerTask::Welcome => {
                self.notifier.notify(
                    &mut self.doc,
                    &mut self.timers,
                    WELCOME_MESSAGE,
                    ToastKind::Success,
                    at,
                );
            }
        }
    }

    /// Event loop: applies events from `rx` and fires timers as they come
    /// due. Returns the runtime once the sender side is dropped; timers still
    /// pending at that point are discarded.
    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<UiEvent>) -> Self {
        let first = self.timers.next_deadline().unwrap_or_else(Instant::now);
        let sleep = tokio::time::sleep_until(first);
        tokio::pin!(sleep);

        loop {
            let armed = self.timers.next_deadline().is_some();
            tokio::select! {
                _ = &mut sleep, if armed => {
                    self.advance(Instant::now());
                }
                maybe = rx.recv() => {
                    match maybe {
                        Some(event) => {
                            self.dispatch(event, Instant::now());
                        }
                        None => break,
                    }
                }
            }
            if let Some(deadline) = self.timers.next_deadline() {
                sleep.as_mut().reset(deadline);
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata::sample_catalog;
    use cookbook_core::MemoryHandoff;
    use std::time::Duration;

    fn home_runtime() -> PageRuntime {
        PageRuntime::new(
            Layout::home(),
            Arc::new(sample_catalog()),
            SiteConfig::default(),
            Box::new(MemoryHandoff::new()),
        )
    }

    fn toast_messages(runtime: &PageRuntime) -> Vec<String> {
        runtime
            .document()
            .toasts()
            .iter()
            .map(|toast| toast.message.clone())
            .collect()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_init_home_renders_and_reveals() {
        let mut runtime = home_runtime();
        let t0 = Instant::now();
        runtime.init_home(t0);

        let doc = runtime.document();
        assert_eq!(doc.card_keys("categoriesGrid").len(), 3);
        assert_eq!(
            doc.card_keys("popularGrid"),
            vec![CardKey::Recipe(3), CardKey::Recipe(1), CardKey::Recipe(4)]
        );
        assert!(doc
            .inner_html("featuredSection")
            .expect("featured exists")
            .contains("Green Curry"));

        runtime.advance(t0 + ms(100));
        let grid = runtime.document().inner_html("popularGrid").expect("grid");
        assert_eq!(grid.matches("reveal-item fade-in").count(), 2);
        assert!(toast_messages(&runtime).is_empty());

        runtime.advance(t0 + ms(500));
        assert_eq!(toast_messages(&runtime), vec![WELCOME_MESSAGE.to_string()]);
    }

    #[test]
    fn test_debounce_runs_one_search_for_a_burst() {
        let mut runtime = home_runtime();
        let t0 = Instant::now();

        for (offset, value) in [(0, "p"), (100, "pa"), (200, "pad")] {
            runtime.dispatch(
                UiEvent::SearchInput {
                    value: value.to_string(),
                },
                t0 + ms(offset),
            );
        }

        runtime.advance(t0 + ms(499));
        assert!(toast_messages(&runtime).is_empty());

        runtime.advance(t0 + ms(500));
        assert_eq!(toast_messages(&runtime), vec!["Found 1 recipes".to_string()]);
        assert_eq!(runtime.search_state().filtered, vec![1]);
        assert_eq!(
            runtime.document().card_keys("popularGrid"),
            vec![CardKey::Recipe(1)]
        );

        runtime.advance(t0 + ms(2000));
        assert_eq!(toast_messages(&runtime).len(), 1);
    }

    #[test]
    fn test_enter_searches_now_and_cancels_debounce() {
        let mut runtime = home_runtime();
        let t0 = Instant::now();
        runtime.dispatch(
            UiEvent::SearchInput {
                value: "noodles".to_string(),
            },
            t0,
        );
        let outcome = runtime.dispatch(
            UiEvent::SearchKey {
                key: "Enter".to_string(),
            },
            t0 + ms(50),
        );
        assert_eq!(outcome, EventOutcome::Handled);
        assert_eq!(toast_messages(&runtime), vec!["Found 2 recipes".to_string()]);

        runtime.advance(t0 + ms(1000));
        assert_eq!(toast_messages(&runtime).len(), 1);

        let other = runtime.dispatch(
            UiEvent::SearchKey {
                key: "a".to_string(),
            },
            t0 + ms(1000),
        );
        assert_eq!(other, EventOutcome::Ignored);
    }

    #[test]
    fn test_search_without_matches() {
        let mut runtime = home_runtime();
        let t0 = Instant::now();
        runtime.dispatch(
            UiEvent::SearchInput {
                value: "pizza".to_string(),
            },
            t0,
        );
        runtime.advance(t0 + ms(300));

        assert_eq!(toast_messages(&runtime), vec![NO_MATCH_TOAST.to_string()]);
        assert!(runtime.search_state().filtered.is_empty());
        let grid = runtime.document().inner_html("popularGrid").expect("grid");
        assert!(grid.contains("No recipes found for &quot;pizza&quot;"));
    }

    #[test]
    fn test_category_click_filters_popular_grid() {
        let mut runtime = home_runtime();
        let t0 = Instant::now();
        runtime.init_home(t0);

        let outcome = runtime.dispatch(
            UiEvent::CardClick {
                key: CardKey::Category(1),
            },
            t0,
        );
        assert_eq!(outcome, EventOutcome::Handled);
        assert_eq!(
            runtime.search_state().current_category,
            CategoryFilter::Id(1)
        );
        assert_eq!(
            toast_messages(&runtime),
            vec!["You selected category: Noodles".to_string()]
        );
        assert_eq!(
            runtime.document().card_keys("popularGrid"),
            vec![CardKey::Recipe(3), CardKey::Recipe(1)]
        );
    }

    #[test]
    fn test_empty_category_names_the_category() {
        let mut runtime = home_runtime();
        let t0 = Instant::now();
        runtime.init_home(t0);

        runtime.dispatch(
            UiEvent::CardClick {
                key: CardKey::Category(2),
            },
            t0,
        );
        assert!(runtime.search_state().filtered.is_empty());
        let grid = runtime.document().inner_html("popularGrid").expect("grid");
        assert!(grid.contains("No recipes in Curry"));
        assert!(!grid.contains("No recipes found for"));
    }

    #[test]
    fn test_recipe_click_resolves_by_key() {
        let mut runtime = home_runtime();
        let t0 = Instant::now();
        runtime.init_home(t0);

        runtime.dispatch(
            UiEvent::CardClick {
                key: CardKey::Recipe(4),
            },
            t0,
        );
        assert_eq!(
            toast_messages(&runtime),
            vec!["Opening recipe: Tom Yum".to_string()]
        );
        assert_eq!(
            runtime.document().pending_navigation(),
            Some("recipe.html?id=4")
        );
        assert_eq!(
            runtime.handoff().get(SELECTED_RECIPE_KEY).as_deref(),
            Some("4")
        );
    }

    #[test]
    fn test_unknown_card_goes_through_fault_boundary() {
        let mut runtime = home_runtime();
        let t0 = Instant::now();
        runtime.init_home(t0);
        let before = runtime.document().card_keys("popularGrid");

        let outcome = runtime.dispatch(
            UiEvent::CardClick {
                key: CardKey::Recipe(77),
            },
            t0,
        );
        assert_eq!(outcome, EventOutcome::Failed);
        assert_eq!(toast_messages(&runtime), vec![FAULT_MESSAGE.to_string()]);
        assert_eq!(runtime.document().toasts()[0].kind, ToastKind::Error);
        assert_eq!(runtime.document().card_keys("popularGrid"), before);
        assert_eq!(runtime.document().pending_navigation(), None);
    }

    #[test]
    fn test_newsletter_validation() {
        let mut runtime = home_runtime();
        let t0 = Instant::now();

        runtime.dispatch(UiEvent::NewsletterSubmit, t0);
        runtime.dispatch(
            UiEvent::NewsletterInput {
                value: "foo@bar".to_string(),
            },
            t0,
        );
        runtime.dispatch(UiEvent::NewsletterSubmit, t0);
        runtime.dispatch(
            UiEvent::NewsletterInput {
                value: "foo@bar.com".to_string(),
            },
            t0,
        );
        runtime.dispatch(UiEvent::NewsletterSubmit, t0);

        let kinds: Vec<ToastKind> = runtime
            .document()
            .toasts()
            .iter()
            .map(|toast| toast.kind)
            .collect();
        assert_eq!(
            toast_messages(&runtime),
            vec![
                EMAIL_MISSING.to_string(),
                EMAIL_INVALID.to_string(),
                SUBSCRIBED.to_string()
            ]
        );
        assert_eq!(
            kinds,
            vec![ToastKind::Warning, ToastKind::Warning, ToastKind::Success]
        );
        assert_eq!(runtime.document().attr("newsletterEmail", "value"), Some(""));
    }

    #[test]
    fn test_newsletter_email_is_not_trimmed() {
        let mut runtime = home_runtime();
        let t0 = Instant::now();

        for value in [" foo@bar.com", "   "] {
            runtime.dispatch(
                UiEvent::NewsletterInput {
                    value: value.to_string(),
                },
                t0,
            );
            runtime.dispatch(UiEvent::NewsletterSubmit, t0);
        }

        assert_eq!(
            toast_messages(&runtime),
            vec![EMAIL_INVALID.to_string(), EMAIL_INVALID.to_string()]
        );
        assert_eq!(runtime.document().attr("newsletterEmail", "value"), Some("   "));
    }

    #[test]
    fn test_anchor_click_requests_smooth_scroll() {
        let mut runtime = home_runtime();

        let outcome = runtime.dispatch(
            UiEvent::AnchorClick {
                href: "#popular".to_string(),
            },
            Instant::now(),
        );
        assert_eq!(outcome, EventOutcome::DefaultPrevented);
        let scroll = runtime
            .document()
            .scroll_request()
            .expect("scroll requested");
        assert_eq!(scroll.target, "popular");
        assert_eq!(scroll.behavior, "smooth");
        assert_eq!(scroll.block, "start");

        let external = runtime.dispatch(
            UiEvent::AnchorClick {
                href: "recipe.html?id=1".to_string(),
            },
            Instant::now(),
        );
        assert_eq!(external, EventOutcome::Ignored);
    }

    #[test]
    fn test_anchor_to_missing_target_only_prevents_default() {
        let mut runtime = home_runtime();
        let outcome = runtime.dispatch(
            UiEvent::AnchorClick {
                href: "#nowhere".to_string(),
            },
            Instant::now(),
        );
        assert_eq!(outcome, EventOutcome::DefaultPrevented);
        assert!(runtime.document().scroll_request().is_none());
    }

    #[test]
    fn test_nav_shadow_follows_scroll() {
        let mut runtime = home_runtime();
        let now = Instant::now();

        runtime.dispatch(UiEvent::Scroll { y: 150.0 }, now);
        assert!(runtime.document().has_class("nav", "shadow-lg"));
        runtime.dispatch(UiEvent::Scroll { y: 100.0 }, now);
        assert!(!runtime.document().has_class("nav", "shadow-lg"));
    }

    #[test]
    fn test_detail_page_runtime() {
        let mut handoff = MemoryHandoff::new();
        handoff.set(SELECTED_RECIPE_KEY, "3".to_string());
        let mut runtime = PageRuntime::new(
            Layout::recipe(),
            Arc::new(sample_catalog()),
            SiteConfig::default(),
            Box::new(handoff),
        );

        let outcome = runtime.init_detail(&Query::parse("?id=1"), Instant::now());
        assert!(matches!(outcome, DetailOutcome::Rendered { id: 1, .. }));
        assert_eq!(runtime.document().text("recipeTitle"), Some("Pad Thai"));
        assert_eq!(runtime.handoff().get(SELECTED_RECIPE_KEY), None);

        runtime.drain();
        let related = runtime
            .document()
            .inner_html("relatedRecipes")
            .expect("related exists");
        assert_eq!(related.matches("reveal-item fade-in").count(), 2);
    }

    #[test]
    fn test_drain_clears_toasts() {
        let mut runtime = home_runtime();
        runtime.init_home(Instant::now());
        runtime.drain();
        assert_eq!(runtime.pending_timers(), 0);
        assert!(runtime.document().toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_loop_debounces_keystrokes() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(home_runtime().run(rx));

        for value in ["p", "pa", "pad"] {
            tx.send(UiEvent::SearchInput {
                value: value.to_string(),
            })
            .expect("runtime is listening");
            tokio::time::sleep(ms(100)).await;
        }
        tokio::time::sleep(ms(250)).await;
        drop(tx);

        let runtime = handle.await.expect("event loop finishes");
        let found: Vec<String> = toast_messages(&runtime)
            .into_iter()
            .filter(|message| message.starts_with("Found"))
            .collect();
        assert_eq!(found, vec!["Found 1 recipes".to_string()]);
        assert_eq!(runtime.search_state().search_term, "pad");
    }
}
