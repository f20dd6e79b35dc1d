use catalog_core::{FacetButton, Platform, Repository};

use super::constants::*;
use super::render::facet_buttons_html;
use crate::platform::dom::{DomCommand, RegionId};

fn button(value: &str, label: &str, active: bool) -> FacetButton {
    FacetButton {
        value: value.to_string(),
        label: label.to_string(),
        count: None,
        active,
    }
}

fn region(id: RegionId, parent: Option<RegionId>, tag: &'static str) -> DomCommand {
    DomCommand::CreateRegion { id, parent, tag }
}

/// Page skeleton plus the tag filter buttons, built once from the repository's tag set.
#[allow(clippy::vec_init_then_push)]
pub fn initial_commands(repository: &Repository) -> Vec<DomCommand> {
    let mut commands = Vec::new();
    let platform_buttons: Vec<FacetButton> = std::iter::once(button("all", "All", true))
        .chain(Platform::ALL.map(|p| button(p.as_str(), p.label(), false)))
        .collect();
    let tag_buttons: Vec<FacetButton> = std::iter::once(button("all", "All", true))
        .chain(repository.tags().iter().map(|tag| button(tag, tag, false)))
        .collect();

    commands.push(region(ROOT, None, "div"));
    commands.push(region(META_THEME_COLOR, Some(ROOT), "meta"));

    commands.push(region(HEADER, Some(ROOT), "header"));
    commands.push(region(THEME_TOGGLE, Some(HEADER), "button"));
    commands.push(DomCommand::SetText {
        id: THEME_TOGGLE,
        text: "Toggle theme".to_string(),
    });

    commands.push(region(MAIN, Some(ROOT), "main"));
    commands.push(region(SEARCH_INPUT, Some(MAIN), "input"));
    commands.push(DomCommand::SetAttribute {
        id: SEARCH_INPUT,
        name: "type",
        value: Some("search".to_string()),
    });
    commands.push(region(SEARCH_CLEAR, Some(MAIN), "button"));
    commands.push(DomCommand::SetHtml {
        id: SEARCH_CLEAR,
        html: "&times;".to_string(),
    });
    commands.push(region(SORT_BUTTONS, Some(MAIN), "div"));
    commands.push(region(PLATFORM_FILTERS, Some(MAIN), "div"));
    commands.push(DomCommand::SetHtml {
        id: PLATFORM_FILTERS,
        html: facet_buttons_html("platform", &platform_buttons),
    });
    commands.push(region(TAG_FILTERS, Some(MAIN), "div"));
    commands.push(DomCommand::SetHtml {
        id: TAG_FILTERS,
        html: facet_buttons_html("tag", &tag_buttons),
    });
    commands.push(region(RESET_FILTERS, Some(MAIN), "button"));
    commands.push(DomCommand::SetText {
        id: RESET_FILTERS,
        text: "Reset filters".to_string(),
    });
    commands.push(region(ACTIVE_FILTERS, Some(MAIN), "div"));
    commands.push(region(RESULTS_COUNT, Some(MAIN), "p"));
    commands.push(region(CONTENT_GRID, Some(MAIN), "div"));
    commands.push(region(NO_RESULTS, Some(MAIN), "div"));
    commands.push(DomCommand::SetHtml {
        id: NO_RESULTS,
        html: "<p>No items match your filters.</p><button id=\"no-results-reset\">Reset filters</button>"
            .to_string(),
    });
    commands.push(region(PAGINATION, Some(MAIN), "nav"));
    commands.push(region(SCROLL_TOP, Some(MAIN), "button"));
    commands.push(DomCommand::SetText {
        id: SCROLL_TOP,
        text: "Back to top".to_string(),
    });

    commands.push(region(FOOTER, Some(ROOT), "footer"));

    commands.push(region(MODAL_OVERLAY, Some(ROOT), "div"));
    commands.push(DomCommand::SetAttribute {
        id: MODAL_OVERLAY,
        name: "aria-hidden",
        value: Some("true".to_string()),
    });
    commands.push(region(MODAL_ID, Some(MODAL_OVERLAY), "div"));
    commands.push(region(MODAL_TITLE, Some(MODAL_OVERLAY), "h2"));
    commands.push(region(MODAL_TAGS, Some(MODAL_OVERLAY), "div"));
    commands.push(region(MODAL_URL, Some(MODAL_OVERLAY), "a"));
    commands.push(region(MODAL_DOWNLOAD, Some(MODAL_OVERLAY), "a"));
    for id in [MODAL_URL, MODAL_DOWNLOAD] {
        commands.push(DomCommand::SetClass {
            id,
            class: CLASS_HIDDEN,
            on: true,
        });
    }

    commands
}
