//! Query-string codec for the browser view state.
//!
//! Keys: `page`, `platform`, `tag`, `sort`, `q`. Keys at their default are
//! omitted, so every state has exactly one canonical query string.

use url::form_urlencoded;

use crate::record::parse_leading_int;

pub const DEFAULT_PAGE: usize = 1;
const ALL: &str = "all";

/// Value of a single-select facet (platform or tag). Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FacetValue {
    #[default]
    All,
    Only(String),
}

impl FacetValue {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL {
            FacetValue::All
        } else {
            FacetValue::Only(raw.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetValue::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            FacetValue::All => None,
            FacetValue::Only(value) => Some(value),
        }
    }

    pub fn as_str(&self) -> &str {
        self.value().unwrap_or(ALL)
    }

    /// True when this facet admits `candidate`.
    pub fn admits(&self, candidate: &str) -> bool {
        self.value().is_none_or(|value| value == candidate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    /// Carried through the URL as typed; orders ascending.
    Unrecognized(String),
}

impl SortOrder {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | "newest" => SortOrder::Newest,
            "oldest" => SortOrder::Oldest,
            other => SortOrder::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Unrecognized(raw) => raw,
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Newest)
    }

    pub fn label(&self) -> &str {
        match self {
            SortOrder::Newest => "Newest first",
            SortOrder::Oldest => "Oldest first",
            SortOrder::Unrecognized(raw) => raw,
        }
    }
}

/// Filter, sort and page selection shared by the URL and the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewState {
    pub page: usize,
    pub platform: FacetValue,
    pub tag: FacetValue,
    pub sort: SortOrder,
    /// Lower-cased search text.
    pub query: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            platform: FacetValue::All,
            tag: FacetValue::All,
            sort: SortOrder::Newest,
            query: String::new(),
        }
    }
}

impl ViewState {
    /// True when any facet other than the page differs from its default.
    pub fn has_active_filters(&self) -> bool {
        !self.platform.is_all()
            || !self.tag.is_all()
            || self.sort != SortOrder::Newest
            || !self.query.is_empty()
    }
}

/// Result of decoding a query string: the state plus the search text as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedUrl {
    pub state: ViewState,
    pub search_text: String,
}

pub fn decode(query: &str) -> DecodedUrl {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    // First occurrence wins, as with URLSearchParams::get.
    let first = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    };

    let search_text = first("q").to_string();
    let state = ViewState {
        page: parse_page(first("page")),
        platform: FacetValue::parse(first("platform")),
        tag: FacetValue::parse(first("tag")),
        sort: SortOrder::parse(first("sort")),
        query: search_text.to_lowercase(),
    };
    DecodedUrl { state, search_text }
}

pub fn encode(state: &ViewState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if state.page > DEFAULT_PAGE {
        serializer.append_pair("page", &state.page.to_string());
    }
    if let Some(platform) = state.platform.value() {
        serializer.append_pair("platform", platform);
    }
    if let Some(tag) = state.tag.value() {
        serializer.append_pair("tag", tag);
    }
    if state.sort != SortOrder::Newest {
        serializer.append_pair("sort", state.sort.as_str());
    }
    if !state.query.is_empty() {
        serializer.append_pair("q", &state.query);
    }
    serializer.finish()
}

fn parse_page(raw: &str) -> usize {
    parse_leading_int(raw)
        .filter(|page| *page >= 1)
        .map(|page| usize::try_from(page).unwrap_or(usize::MAX))
        .unwrap_or(DEFAULT_PAGE)
}

/// Tracks the address bar and decides when a history entry is needed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlSync {
    location: String,
    applying_navigation: bool,
}

impl UrlSync {
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the query to push, or `None` when the address bar already shows it
    /// or a navigation is being applied.
    pub fn push(&mut self, state: &ViewState) -> Option<String> {
        if self.applying_navigation {
            return None;
        }
        let next = encode(state);
        if next == self.location {
            return None;
        }
        self.location.clone_from(&next);
        Some(next)
    }

    /// The browser moved to `location` on its own; suppress pushes until `end_navigation`.
    pub fn begin_navigation(&mut self, location: &str) {
        self.location = location.strip_prefix('?').unwrap_or(location).to_string();
        self.applying_navigation = true;
    }

    pub fn end_navigation(&mut self) {
        self.applying_navigation = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_parsing_floors_and_falls_back() {
        assert_eq!(parse_page("3"), 3);
        assert_eq!(parse_page("0"), 1);
        assert_eq!(parse_page("-4"), 1);
        assert_eq!(parse_page("two"), 1);
        assert_eq!(parse_page("7abc"), 7);
        assert_eq!(parse_page(""), 1);
    }

    #[test]
    fn push_is_suppressed_while_navigating() {
        let mut sync = UrlSync::default();
        sync.begin_navigation("?tag=excel");
        let state = ViewState {
            page: 2,
            ..ViewState::default()
        };
        assert_eq!(sync.push(&state), None);
        assert_eq!(sync.location(), "tag=excel");
        sync.end_navigation();
        assert_eq!(sync.push(&state), Some("page=2".to_string()));
        assert_eq!(sync.push(&state), None);
    }
}
