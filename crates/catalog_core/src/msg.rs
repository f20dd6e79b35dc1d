use crate::modal::FocusTarget;
use crate::query::{FacetValue, SortOrder};
use crate::record::RecordKey;
use crate::theme::Theme;
use crate::view_model::FilterFacet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    ShiftTab,
    Slash,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page loaded at `location` with the stored theme preference.
    Started { location: String, theme: Theme },
    /// Search field text changed (filtering waits for the debounce).
    SearchInput(String),
    /// Debounce timer elapsed for `ticket`.
    SearchDebounceElapsed { ticket: u64 },
    /// Clear button inside the search field.
    SearchCleared,
    SortSelected(SortOrder),
    PlatformSelected(FacetValue),
    TagSelected(FacetValue),
    /// Toolbar reset or the empty-state reset.
    ResetFilters,
    FilterChipDismissed(FilterFacet),
    PageRequested(usize),
    /// Back/forward moved the address bar to `location`.
    Navigated(String),
    /// Card clicked or activated with Enter/Space.
    CardActivated(RecordKey),
    /// Close button or backdrop click.
    ModalDismissed,
    KeyPressed(Key),
    FocusChanged(FocusTarget),
    Scrolled { offset: u32 },
    AnimationFrame,
    ScrollTopClicked,
    ThemeToggled,
    NoOp,
}
