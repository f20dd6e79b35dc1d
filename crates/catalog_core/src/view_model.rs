use crate::modal::sanitize_link;
use crate::pagination::{pagination, PaginationView};
use crate::query::{FacetValue, SortOrder};
use crate::record::{ContentRecord, Platform};
use crate::state::AppState;
use crate::theme::Theme;

pub const NO_RESULTS_TEXT: &str = "No items found";
/// Href given to links that failed sanitizing.
pub const INERT_HREF: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterFacet {
    Platform,
    Tag,
    Sort,
    Search,
}

impl FilterFacet {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterFacet::Platform => "platform",
            FilterFacet::Tag => "tag",
            FilterFacet::Sort => "sort",
            FilterFacet::Search => "search",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "platform" => Some(FilterFacet::Platform),
            "tag" => Some(FilterFacet::Tag),
            "sort" => Some(FilterFacet::Sort),
            "search" => Some(FilterFacet::Search),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub key: String,
    pub platform: Platform,
    pub title: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub facet: FilterFacet,
    pub label: String,
}

/// A platform or tag filter button; `count` is `None` on the "All" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetButton {
    pub value: String,
    pub label: String,
    pub count: Option<usize>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortButton {
    pub sort: SortOrder,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: String,
    pub label: String,
    pub inert: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub key: String,
    pub title: String,
    pub platform: Platform,
    pub tags: Vec<String>,
    pub view_link: Option<LinkView>,
    pub download_link: Option<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowserViewModel {
    pub result_text: String,
    pub cards: Vec<CardView>,
    /// Empty-state panel with its reset button.
    pub empty: bool,
    pub pagination: Option<PaginationView>,
    pub chips: Vec<FilterChip>,
    pub platform_buttons: Vec<FacetButton>,
    pub tag_buttons: Vec<FacetButton>,
    pub sort_buttons: Vec<SortButton>,
    pub search_text: String,
    pub search_clear_visible: bool,
    pub reset_visible: bool,
    pub theme: Theme,
    pub scroll_top_visible: bool,
    pub modal: Option<ModalView>,
    /// Header, main and footer hidden from assistive technology while the modal is up.
    pub background_inert: bool,
}

pub fn result_text(total_items: usize, start_index: usize, end_index: usize) -> String {
    if total_items == 0 {
        NO_RESULTS_TEXT.to_string()
    } else {
        format!(
            "Showing {}\u{2013}{} of {} items",
            start_index + 1,
            end_index,
            total_items
        )
    }
}

pub(crate) fn project(state: &AppState) -> BrowserViewModel {
    let repository = &state.repository;
    let listing = &state.listing;
    let view = &state.view;

    let cards = listing.records(repository).map(card).collect();
    let modal = state
        .modal
        .record_key()
        .and_then(|key| repository.lookup(key))
        .map(|record| modal_view(record, state));

    BrowserViewModel {
        result_text: result_text(
            listing.total_items,
            listing.start_index,
            listing.end_index,
        ),
        cards,
        empty: listing.is_empty(),
        pagination: if listing.is_empty() {
            None
        } else {
            pagination(listing.page, listing.total_pages)
        },
        chips: chips(state),
        platform_buttons: platform_buttons(state),
        tag_buttons: tag_buttons(state),
        sort_buttons: [SortOrder::Newest, SortOrder::Oldest]
            .into_iter()
            .map(|sort| SortButton {
                active: sort == view.sort,
                sort,
            })
            .collect(),
        search_text: state.search_text.clone(),
        search_clear_visible: !state.search_text.is_empty(),
        reset_visible: view.has_active_filters(),
        theme: state.theme,
        scroll_top_visible: state.scroll.top_visible,
        background_inert: modal.is_some(),
        modal,
    }
}

fn card(record: &ContentRecord) -> CardView {
    CardView {
        key: record.key().to_string(),
        platform: record.platform,
        title: record.title.clone(),
        tags: record.tags.clone(),
    }
}

fn chips(state: &AppState) -> Vec<FilterChip> {
    let view = &state.view;
    let mut chips = Vec::new();
    if let Some(platform) = view.platform.value() {
        let label = Platform::parse(platform).map_or(platform, |known| known.label());
        chips.push(FilterChip {
            facet: FilterFacet::Platform,
            label: format!("Platform: {label}"),
        });
    }
    if let Some(tag) = view.tag.value() {
        chips.push(FilterChip {
            facet: FilterFacet::Tag,
            label: format!("Tag: {tag}"),
        });
    }
    if view.sort != SortOrder::Newest {
        chips.push(FilterChip {
            facet: FilterFacet::Sort,
            label: format!("Sort: {}", view.sort.label()),
        });
    }
    if !view.query.is_empty() {
        chips.push(FilterChip {
            facet: FilterFacet::Search,
            label: format!("Search: \"{}\"", view.query),
        });
    }
    chips
}

fn platform_buttons(state: &AppState) -> Vec<FacetButton> {
    let current = &state.view.platform;
    let mut buttons = vec![all_button(current)];
    buttons.extend(Platform::ALL.into_iter().map(|platform| FacetButton {
        value: platform.as_str().to_string(),
        label: platform.label().to_string(),
        count: Some(state.counts.platform(platform)),
        active: current.value() == Some(platform.as_str()),
    }));
    buttons
}

fn tag_buttons(state: &AppState) -> Vec<FacetButton> {
    let current = &state.view.tag;
    let mut buttons = vec![all_button(current)];
    buttons.extend(state.repository.tags().iter().map(|tag| FacetButton {
        value: tag.clone(),
        label: tag.clone(),
        count: Some(state.counts.tag(tag)),
        active: current.value() == Some(tag.as_str()),
    }));
    buttons
}

fn all_button(current: &FacetValue) -> FacetButton {
    FacetButton {
        value: FacetValue::All.as_str().to_string(),
        label: "All".to_string(),
        count: None,
        active: current.is_all(),
    }
}

fn modal_view(record: &ContentRecord, state: &AppState) -> ModalView {
    let base = state.settings.base_url.as_ref();
    let link = |raw: &str, label: &str| {
        let sanitized = sanitize_link(raw, base);
        LinkView {
            inert: sanitized.is_none(),
            href: sanitized.unwrap_or_else(|| INERT_HREF.to_string()),
            label: label.to_string(),
        }
    };
    ModalView {
        key: record.key().to_string(),
        title: record.title.clone(),
        platform: record.platform,
        tags: record.tags.clone(),
        view_link: record
            .view_url()
            .map(|url| link(url, record.platform.link_label())),
        download_link: record.download().map(|url| link(url, "Download Files")),
    }
}
