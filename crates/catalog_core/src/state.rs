use std::sync::Arc;
use std::time::Duration;

use catalog_logging::{catalog_debug, set_render_cycle};
use url::Url;

use crate::debounce::Debouncer;
use crate::engine::{self, FacetCounts, Listing};
use crate::modal::{FocusTarget, ModalState};
use crate::query::{DecodedUrl, UrlSync, ViewState};
use crate::repository::Repository;
use crate::theme::Theme;
use crate::view_model::{self, BrowserViewModel};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(150);
/// Scroll offset past which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base for resolving relative record links; `None` rejects relative links.
    pub base_url: Option<Url>,
    pub search_debounce: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: None,
            search_debounce: SEARCH_DEBOUNCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ScrollState {
    pub(crate) offset: u32,
    pub(crate) frame_pending: bool,
    pub(crate) top_visible: bool,
}

/// Whole browser state. `update` is its only writer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) repository: Arc<Repository>,
    pub(crate) settings: Settings,
    pub(crate) view: ViewState,
    /// Search field text as typed; `view.query` is its lower-cased, debounced copy.
    pub(crate) search_text: String,
    pub(crate) url: UrlSync,
    pub(crate) listing: Listing,
    pub(crate) counts: FacetCounts,
    pub(crate) debounce: Debouncer,
    pub(crate) modal: ModalState,
    pub(crate) focus: FocusTarget,
    pub(crate) theme: Theme,
    pub(crate) scroll: ScrollState,
    pub(crate) pipeline_runs: u64,
    dirty: bool,
}

impl AppState {
    pub fn new(repository: Arc<Repository>, settings: Settings) -> Self {
        Self {
            repository,
            settings,
            ..Self::default()
        }
    }

    pub fn view(&self) -> BrowserViewModel {
        view_model::project(self)
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Query string currently shown in the address bar, without `?`.
    pub fn location(&self) -> &str {
        self.url.location()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn facet_counts(&self) -> &FacetCounts {
        &self.counts
    }

    pub fn focus(&self) -> &FocusTarget {
        &self.focus
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn search_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Number of times the recompute pipeline has run.
    pub fn pipeline_runs(&self) -> u64 {
        self.pipeline_runs
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn apply_decoded(&mut self, decoded: DecodedUrl) {
        self.view = decoded.state;
        self.search_text = decoded.search_text;
        self.debounce.cancel();
    }

    /// Re-runs the engine and writes the clamped page back into the view state.
    pub(crate) fn recompute(&mut self) {
        let listing = engine::compute(&self.view, &self.repository);
        self.counts = engine::facet_counts(&self.view, &self.repository);
        if listing.page != self.view.page {
            catalog_debug!(
                "page {} clamped to {} of {}",
                self.view.page,
                listing.page,
                listing.total_pages
            );
        }
        self.view.page = listing.page;
        self.listing = listing;
        self.pipeline_runs += 1;
        set_render_cycle(self.pipeline_runs);
        catalog_debug!(
            "recomputed: {} items, page {}/{}",
            self.listing.total_items,
            self.listing.page,
            self.listing.total_pages
        );
        self.mark_dirty();
    }
}
