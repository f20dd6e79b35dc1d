use std::sync::Arc;

use catalog_logging::{catalog_debug, catalog_trace};

use crate::modal::FocusTarget;
use crate::query::{decode, FacetValue, SortOrder, DEFAULT_PAGE};
use crate::state::SCROLL_TOP_THRESHOLD;
use crate::view_model::FilterFacet;
use crate::{AppState, Effect, Key, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();
    match msg {
        Msg::Started { location, theme } => {
            state.theme = theme;
            apply_location(&mut state, &location, &mut effects);
        }
        Msg::Navigated(location) => {
            catalog_debug!("navigated to {:?}", location);
            apply_location(&mut state, &location, &mut effects);
        }
        Msg::SearchInput(text) => {
            state.search_text = text;
            let ticket = state.debounce.schedule();
            effects.push(Effect::ScheduleSearch {
                ticket,
                delay: state.settings.search_debounce,
            });
            state.mark_dirty();
        }
        Msg::SearchDebounceElapsed { ticket } => {
            if state.debounce.fire(ticket) {
                state.view.query = state.search_text.to_lowercase();
                state.view.page = DEFAULT_PAGE;
                run_pipeline(&mut state, &mut effects);
            } else {
                catalog_trace!("stale search ticket {} dropped", ticket);
            }
        }
        Msg::SearchCleared => {
            clear_search(&mut state);
            state.view.page = DEFAULT_PAGE;
            run_pipeline(&mut state, &mut effects);
            focus(&mut state, FocusTarget::SearchInput, &mut effects);
        }
        Msg::SortSelected(sort) => {
            state.view.sort = sort;
            state.view.page = DEFAULT_PAGE;
            run_pipeline(&mut state, &mut effects);
        }
        Msg::PlatformSelected(platform) => {
            state.view.platform = platform;
            state.view.page = DEFAULT_PAGE;
            run_pipeline(&mut state, &mut effects);
        }
        Msg::TagSelected(tag) => {
            state.view.tag = tag;
            state.view.page = DEFAULT_PAGE;
            run_pipeline(&mut state, &mut effects);
        }
        Msg::ResetFilters => {
            clear_search(&mut state);
            state.view = Default::default();
            run_pipeline(&mut state, &mut effects);
            focus(&mut state, FocusTarget::SearchInput, &mut effects);
        }
        Msg::FilterChipDismissed(facet) => {
            match facet {
                FilterFacet::Platform => state.view.platform = FacetValue::All,
                FilterFacet::Tag => state.view.tag = FacetValue::All,
                FilterFacet::Sort => state.view.sort = SortOrder::Newest,
                FilterFacet::Search => clear_search(&mut state),
            }
            state.view.page = DEFAULT_PAGE;
            run_pipeline(&mut state, &mut effects);
        }
        Msg::PageRequested(page) => {
            let in_range = (1..=state.listing.total_pages).contains(&page);
            if in_range && page != state.view.page {
                state.view.page = page;
                run_pipeline(&mut state, &mut effects);
                effects.push(Effect::ScrollToTop);
            }
        }
        Msg::CardActivated(key) => {
            let repository = Arc::clone(&state.repository);
            match repository.lookup(&key) {
                Some(record) if !state.modal.is_open() => {
                    let target = state.modal.open(record, state.focus.clone());
                    focus(&mut state, target, &mut effects);
                    state.mark_dirty();
                }
                Some(_) => {}
                None => catalog_debug!("no record for key {}", key),
            }
        }
        Msg::ModalDismissed => close_modal(&mut state, &mut effects),
        Msg::KeyPressed(key) => handle_key(&mut state, key, &mut effects),
        Msg::FocusChanged(target) => state.focus = target,
        Msg::Scrolled { offset } => {
            state.scroll.offset = offset;
            if !state.scroll.frame_pending {
                state.scroll.frame_pending = true;
                effects.push(Effect::RequestAnimationFrame);
            }
        }
        Msg::AnimationFrame => {
            if state.scroll.frame_pending {
                state.scroll.frame_pending = false;
                let visible = state.scroll.offset > SCROLL_TOP_THRESHOLD;
                if visible != state.scroll.top_visible {
                    state.scroll.top_visible = visible;
                    state.mark_dirty();
                }
            }
        }
        Msg::ScrollTopClicked => effects.push(Effect::ScrollToTop),
        Msg::ThemeToggled => {
            state.theme = state.theme.toggled();
            effects.push(Effect::PersistTheme(state.theme));
            state.mark_dirty();
        }
        Msg::NoOp => {}
    }

    (state, effects)
}

/// The single place where a state change reaches the URL and the engine.
fn run_pipeline(state: &mut AppState, effects: &mut Vec<Effect>) {
    if let Some(query) = state.url.push(&state.view) {
        catalog_debug!("push ?{}", query);
        effects.push(Effect::PushUrl { query });
    }
    state.recompute();
}

fn apply_location(state: &mut AppState, location: &str, effects: &mut Vec<Effect>) {
    state.url.begin_navigation(location);
    state.apply_decoded(decode(location));
    run_pipeline(state, effects);
    state.url.end_navigation();
}

fn clear_search(state: &mut AppState) {
    state.search_text.clear();
    state.view.query.clear();
    state.debounce.cancel();
}

fn focus(state: &mut AppState, target: FocusTarget, effects: &mut Vec<Effect>) {
    state.focus = target.clone();
    effects.push(Effect::Focus(target));
}

fn close_modal(state: &mut AppState, effects: &mut Vec<Effect>) {
    if !state.modal.is_open() {
        return;
    }
    let restore = state.modal.close();
    state.mark_dirty();
    match restore {
        Some(target) => focus(state, target, effects),
        None => state.focus = FocusTarget::Body,
    }
}

fn handle_key(state: &mut AppState, key: Key, effects: &mut Vec<Effect>) {
    if state.modal.is_open() {
        match key {
            Key::Escape => close_modal(state, effects),
            Key::Tab | Key::ShiftTab => {
                let next = state.modal.cycle(&state.focus, key == Key::ShiftTab);
                focus(state, next, effects);
            }
            Key::Slash | Key::Other => {}
        }
        return;
    }
    if key == Key::Slash && !state.focus.is_text_input() {
        focus(state, FocusTarget::SearchInput, effects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::ModalControl;

    #[test]
    fn closing_an_unopened_modal_is_silent() {
        let state = AppState::default();
        let (mut next, effects) = update(state, Msg::ModalDismissed);
        assert!(effects.is_empty());
        assert!(!next.consume_dirty());
        assert_eq!(next.focus(), &FocusTarget::Body);
    }

    #[test]
    fn tab_without_modal_keeps_focus() {
        let (next, effects) = update(AppState::default(), Msg::KeyPressed(Key::Tab));
        assert!(effects.is_empty());
        assert_ne!(next.focus(), &FocusTarget::Modal(ModalControl::Close));
    }
}
