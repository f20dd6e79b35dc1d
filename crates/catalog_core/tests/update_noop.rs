mod common;

use catalog_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let (state, _) = common::start("tag=excel");
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn default_state_renders_empty_catalog() {
    let state = AppState::default();
    let view = state.view();
    assert_eq!(view.result_text, "No items found");
    assert!(view.empty);
    assert!(view.pagination.is_none());
}
