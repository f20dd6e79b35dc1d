use std::fmt::Write as _;

use catalog_core::{
    BrowserViewModel, CardView, FacetButton, FilterChip, LinkView, PageSlot,
    PaginationView, Platform, SortButton,
};

use super::constants::*;
use crate::platform::dom::{escape_html, DomCommand, RegionId};

/// Commands that bring every region in line with `view`. Each region is replaced wholesale.
#[allow(clippy::vec_init_then_push)]
pub fn render(view: &BrowserViewModel) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    cmds.push(attribute(ROOT, "data-theme", Some(view.theme.as_str())));
    cmds.push(attribute(META_THEME_COLOR, "content", Some(view.theme.color())));

    cmds.push(attribute(SEARCH_INPUT, "value", Some(view.search_text.as_str())));
    cmds.push(hidden(SEARCH_CLEAR, !view.search_clear_visible));
    cmds.push(html(SORT_BUTTONS, sort_buttons_html(&view.sort_buttons)));
    cmds.push(html(
        PLATFORM_FILTERS,
        facet_buttons_html("platform", &view.platform_buttons),
    ));
    cmds.push(html(TAG_FILTERS, facet_buttons_html("tag", &view.tag_buttons)));
    cmds.push(hidden(RESET_FILTERS, !view.reset_visible));
    cmds.push(html(ACTIVE_FILTERS, chips_html(&view.chips)));
    cmds.push(hidden(ACTIVE_FILTERS, view.chips.is_empty()));

    cmds.push(DomCommand::SetText {
        id: RESULTS_COUNT,
        text: view.result_text.clone(),
    });
    cmds.push(html(CONTENT_GRID, view.cards.iter().map(card_html).collect()));
    cmds.push(hidden(NO_RESULTS, !view.empty));
    cmds.push(html(
        PAGINATION,
        view.pagination
            .as_ref()
            .map(pagination_html)
            .unwrap_or_default(),
    ));
    cmds.push(DomCommand::SetClass {
        id: SCROLL_TOP,
        class: CLASS_VISIBLE,
        on: view.scroll_top_visible,
    });

    render_modal(&mut cmds, view);
    cmds
}

fn render_modal(cmds: &mut Vec<DomCommand>, view: &BrowserViewModel) {
    let open = view.modal.is_some();
    cmds.push(DomCommand::SetClass {
        id: MODAL_OVERLAY,
        class: CLASS_MODAL_ACTIVE,
        on: open,
    });
    cmds.push(attribute(
        MODAL_OVERLAY,
        "aria-hidden",
        Some(if open { "false" } else { "true" }),
    ));
    for landmark in [HEADER, MAIN, FOOTER] {
        cmds.push(attribute(
            landmark,
            "aria-hidden",
            view.background_inert.then_some("true"),
        ));
    }
    cmds.push(DomCommand::SetClass {
        id: ROOT,
        class: CLASS_SCROLL_LOCKED,
        on: view.background_inert,
    });

    let modal = view.modal.as_ref();
    cmds.push(html(
        MODAL_ID,
        modal
            .map(|modal| platform_badge(modal.platform))
            .unwrap_or_default(),
    ));
    cmds.push(DomCommand::SetText {
        id: MODAL_TITLE,
        text: modal.map(|modal| modal.title.clone()).unwrap_or_default(),
    });
    cmds.push(html(
        MODAL_TAGS,
        modal.map(|modal| tags_html(&modal.tags)).unwrap_or_default(),
    ));
    render_link(cmds, MODAL_URL, modal.and_then(|m| m.view_link.as_ref()));
    render_link(
        cmds,
        MODAL_DOWNLOAD,
        modal.and_then(|m| m.download_link.as_ref()),
    );
}

fn render_link(cmds: &mut Vec<DomCommand>, id: RegionId, link: Option<&LinkView>) {
    cmds.push(hidden(id, link.is_none()));
    cmds.push(attribute(id, "href", link.map(|link| link.href.as_str())));
    cmds.push(attribute(
        id,
        "aria-disabled",
        link.filter(|link| link.inert).map(|_| "true"),
    ));
    cmds.push(DomCommand::SetText {
        id,
        text: link.map(|link| link.label.clone()).unwrap_or_default(),
    });
}

fn html(id: RegionId, html: String) -> DomCommand {
    DomCommand::SetHtml { id, html }
}

fn hidden(id: RegionId, on: bool) -> DomCommand {
    DomCommand::SetClass {
        id,
        class: CLASS_HIDDEN,
        on,
    }
}

fn attribute(id: RegionId, name: &'static str, value: Option<&str>) -> DomCommand {
    DomCommand::SetAttribute {
        id,
        name,
        value: value.map(str::to_string),
    }
}

fn platform_badge(platform: Platform) -> String {
    format!(
        "<span class=\"platform-badge {}\">{}</span>",
        platform.as_str(),
        platform.label()
    )
}

fn tags_html(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("<span class=\"tag-badge\">{}</span>", escape_html(tag)))
        .collect()
}

fn card_html(card: &CardView) -> String {
    format!(
        "<article class=\"session-card\" data-key=\"{key}\" tabindex=\"0\" role=\"button\" \
         aria-label=\"View details for {title}\">\
         <div class=\"session-id\">{badge}</div>\
         <h3 class=\"session-title\">{title}</h3>\
         <div class=\"card-tags\">{tags}</div>\
         <div class=\"card-cta\"><span>View Details</span></div>\
         </article>",
        key = escape_html(&card.key),
        title = escape_html(&card.title),
        badge = platform_badge(card.platform),
        tags = tags_html(&card.tags),
    )
}

fn chips_html(chips: &[FilterChip]) -> String {
    chips
        .iter()
        .map(|chip| {
            let label = escape_html(&chip.label);
            format!(
                "<button class=\"active-filter-chip\" data-dismiss=\"{}\" \
                 aria-label=\"Remove filter: {label}\">{label} \
                 <span class=\"chip-dismiss\">&times;</span></button>",
                chip.facet.as_str()
            )
        })
        .collect()
}

fn sort_buttons_html(buttons: &[SortButton]) -> String {
    buttons
        .iter()
        .map(|button| {
            format!(
                "<button class=\"btn-sort{}\" data-sort=\"{}\" aria-pressed=\"{}\">{}</button>",
                if button.active { " active" } else { "" },
                escape_html(button.sort.as_str()),
                button.active,
                escape_html(button.sort.label()),
            )
        })
        .collect()
}

/// Filter buttons for `facet`; the count span is omitted when `count` is `None`.
pub(crate) fn facet_buttons_html(facet: &str, buttons: &[FacetButton]) -> String {
    let mut out = String::new();
    for button in buttons {
        let _ = write!(
            out,
            "<button class=\"btn-filter{}\" data-{facet}=\"{}\">{}",
            if button.active { " active" } else { "" },
            escape_html(&button.value),
            escape_html(&button.label),
        );
        if let Some(count) = button.count {
            let _ = write!(out, "<span class=\"filter-count\">{count}</span>");
        }
        out.push_str("</button>");
    }
    out
}

fn pagination_html(pagination: &PaginationView) -> String {
    let mut out = String::new();
    let first = pagination.first;
    let prev = pagination.prev;
    page_button(&mut out, "page-first", first.target, first.disabled, "First page", "&laquo;");
    page_button(&mut out, "page-prev", prev.target, prev.disabled, "Previous page", "&lsaquo;");
    for slot in &pagination.slots {
        match *slot {
            PageSlot::Page(page) => {
                let current = page == pagination.current;
                let _ = write!(
                    out,
                    "<button class=\"page-btn page-num{}\" data-page=\"{page}\"{} aria-label=\"Page {page}\">{page}</button>",
                    if current { " active" } else { "" },
                    if current { " aria-current=\"page\"" } else { "" },
                );
            }
            PageSlot::Ellipsis => out.push_str("<span class=\"page-ellipsis\">&hellip;</span>"),
        }
    }
    let next = pagination.next;
    let last = pagination.last;
    page_button(&mut out, "page-next", next.target, next.disabled, "Next page", "&rsaquo;");
    page_button(&mut out, "page-last", last.target, last.disabled, "Last page", "&raquo;");
    out
}

fn page_button(out: &mut String, class: &str, target: usize, disabled: bool, label: &str, text: &str) {
    let _ = write!(
        out,
        "<button class=\"page-btn {class}\" data-page=\"{target}\"{} aria-label=\"{label}\">{text}</button>",
        if disabled { " disabled" } else { "" },
    );
}
