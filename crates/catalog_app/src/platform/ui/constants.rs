use crate::platform::dom::RegionId;

pub const ROOT: RegionId = "catalog";
pub const META_THEME_COLOR: RegionId = "theme-color";
pub const HEADER: RegionId = "site-header";
pub const MAIN: RegionId = "main-content";
pub const FOOTER: RegionId = "site-footer";

pub const THEME_TOGGLE: RegionId = "theme-toggle";
pub const SEARCH_INPUT: RegionId = "search-input";
pub const SEARCH_CLEAR: RegionId = "search-clear";
pub const SORT_BUTTONS: RegionId = "sort-buttons";
pub const PLATFORM_FILTERS: RegionId = "platform-filters";
pub const TAG_FILTERS: RegionId = "tag-filters";
pub const RESET_FILTERS: RegionId = "reset-filters";
pub const ACTIVE_FILTERS: RegionId = "active-filters";
pub const RESULTS_COUNT: RegionId = "results-count";
pub const CONTENT_GRID: RegionId = "content-grid";
pub const NO_RESULTS: RegionId = "no-results";
pub const PAGINATION: RegionId = "pagination";
pub const SCROLL_TOP: RegionId = "scroll-top";

pub const MODAL_OVERLAY: RegionId = "modal-overlay";
pub const MODAL_ID: RegionId = "modal-id";
pub const MODAL_TITLE: RegionId = "modal-title";
pub const MODAL_TAGS: RegionId = "modal-tags";
pub const MODAL_URL: RegionId = "modal-url";
pub const MODAL_DOWNLOAD: RegionId = "modal-download";

pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_MODAL_ACTIVE: &str = "modal-active";
pub const CLASS_SCROLL_LOCKED: &str = "scroll-locked";
