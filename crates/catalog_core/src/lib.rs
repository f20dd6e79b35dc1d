//! Catalog core: pure state machine, URL codec, filter engine and view-model helpers.
mod debounce;
mod effect;
mod engine;
mod modal;
mod msg;
mod pagination;
mod query;
mod record;
mod repository;
mod state;
mod theme;
mod update;
mod view_model;

pub use debounce::Debouncer;
pub use effect::Effect;
pub use engine::{compute, facet_counts, page_bounds, FacetCounts, Listing, PageBounds, PAGE_SIZE};
pub use modal::{sanitize_link, FocusTarget, ModalControl, ModalState};
pub use msg::{Key, Msg};
pub use pagination::{page_slots, pagination, PageControl, PageSlot, PaginationView};
pub use query::{decode, encode, DecodedUrl, FacetValue, SortOrder, UrlSync, ViewState, DEFAULT_PAGE};
pub use record::{ContentRecord, Platform, RecordKey};
pub use repository::{Repository, RepositoryError};
pub use state::{AppState, Settings, SCROLL_TOP_THRESHOLD, SEARCH_DEBOUNCE};
pub use theme::Theme;
pub use update::update;
pub use view_model::{
    result_text, BrowserViewModel, CardView, FacetButton, FilterChip, FilterFacet, LinkView,
    ModalView, SortButton, INERT_HREF, NO_RESULTS_TEXT,
};
