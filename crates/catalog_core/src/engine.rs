//! Filter, sort and paginate: a pure function of view state and repository.

use std::collections::BTreeMap;

use crate::query::{FacetValue, ViewState};
use crate::record::{ContentRecord, Platform};
use crate::repository::{Entry, Repository};

pub const PAGE_SIZE: usize = 12;

/// One page of the filtered, sorted result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Repository indices of the records on the current page, in display order.
    pub indices: Vec<usize>,
    pub total_items: usize,
    pub total_pages: usize,
    /// Requested page clamped into `1..=total_pages`.
    pub page: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            indices: Vec::new(),
            total_items: 0,
            total_pages: 1,
            page: 1,
            start_index: 0,
            end_index: 0,
        }
    }
}

impl Listing {
    pub fn records<'a>(
        &'a self,
        repository: &'a Repository,
    ) -> impl Iterator<Item = &'a ContentRecord> + 'a {
        self.indices
            .iter()
            .filter_map(move |&index| repository.get(index))
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// Per-facet result counts, each holding the other facets fixed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetCounts {
    pub platforms: BTreeMap<Platform, usize>,
    pub tags: BTreeMap<String, usize>,
}

impl FacetCounts {
    pub fn platform(&self, platform: Platform) -> usize {
        self.platforms.get(&platform).copied().unwrap_or(0)
    }

    pub fn tag(&self, tag: &str) -> usize {
        self.tags.get(tag).copied().unwrap_or(0)
    }
}

pub fn compute(state: &ViewState, repository: &Repository) -> Listing {
    let query = state.query.to_lowercase();
    let entries = repository.entries();

    let mut matched: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            platform_matches(entry, &state.platform)
                && tag_matches(entry, &state.tag)
                && query_matches(entry, &query)
        })
        .map(|(index, _)| index)
        .collect();

    // sort_by is stable, so equal keys keep repository order in both directions.
    let descending = state.sort.is_descending();
    matched.sort_by(|&a, &b| {
        let (ka, kb) = (entries[a].sort_key, entries[b].sort_key);
        if descending {
            kb.cmp(&ka)
        } else {
            ka.cmp(&kb)
        }
    });

    let total_items = matched.len();
    let bounds = page_bounds(total_items, state.page);
    let indices = matched[bounds.start_index..bounds.end_index].to_vec();

    Listing {
        indices,
        total_items,
        total_pages: bounds.total_pages,
        page: bounds.page,
        start_index: bounds.start_index,
        end_index: bounds.end_index,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub page: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

pub fn page_bounds(total_items: usize, requested_page: usize) -> PageBounds {
    let total_pages = total_items.div_ceil(PAGE_SIZE).max(1);
    let page = requested_page.clamp(1, total_pages);
    let start_index = (page - 1) * PAGE_SIZE;
    let end_index = (start_index + PAGE_SIZE).min(total_items);
    PageBounds {
        page,
        total_pages,
        start_index,
        end_index,
    }
}

pub fn facet_counts(state: &ViewState, repository: &Repository) -> FacetCounts {
    let query = state.query.to_lowercase();
    let mut platforms: BTreeMap<Platform, usize> =
        Platform::ALL.into_iter().map(|p| (p, 0)).collect();
    let mut tags: BTreeMap<String, usize> = repository
        .tags()
        .iter()
        .map(|tag| (tag.clone(), 0))
        .collect();

    for entry in repository.entries() {
        if !query_matches(entry, &query) {
            continue;
        }
        if tag_matches(entry, &state.tag) {
            *platforms.entry(entry.record.platform).or_insert(0) += 1;
        }
        if platform_matches(entry, &state.platform) {
            let record_tags = &entry.record.tags;
            for (position, tag) in record_tags.iter().enumerate() {
                if record_tags[..position].contains(tag) {
                    continue;
                }
                if let Some(count) = tags.get_mut(tag) {
                    *count += 1;
                }
            }
        }
    }

    FacetCounts { platforms, tags }
}

fn platform_matches(entry: &Entry, filter: &FacetValue) -> bool {
    filter.admits(entry.record.platform.as_str())
}

fn tag_matches(entry: &Entry, filter: &FacetValue) -> bool {
    filter.value().is_none_or(|tag| entry.record.has_tag(tag))
}

fn query_matches(entry: &Entry, query: &str) -> bool {
    query.is_empty() || entry.haystack.contains(query)
}
