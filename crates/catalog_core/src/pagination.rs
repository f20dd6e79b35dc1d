use std::collections::BTreeSet;

/// Above this many pages the page list is abbreviated with ellipses.
const FULL_LIST_LIMIT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub target: usize,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current: usize,
    pub total: usize,
    pub first: PageControl,
    pub prev: PageControl,
    pub slots: Vec<PageSlot>,
    pub next: PageControl,
    pub last: PageControl,
}

/// Pagination control for `current` of `total`; `None` when everything fits on one page.
pub fn pagination(current: usize, total: usize) -> Option<PaginationView> {
    if total <= 1 {
        return None;
    }
    let on_first = current <= 1;
    let on_last = current >= total;
    Some(PaginationView {
        current,
        total,
        first: PageControl {
            target: 1,
            disabled: on_first,
        },
        prev: PageControl {
            target: current.saturating_sub(1),
            disabled: on_first,
        },
        slots: page_slots(current, total),
        next: PageControl {
            target: current + 1,
            disabled: on_last,
        },
        last: PageControl {
            target: total,
            disabled: on_last,
        },
    })
}

pub fn page_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= FULL_LIST_LIMIT {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut kept = BTreeSet::from([1, 2, total - 1, total]);
    let low = current.saturating_sub(1).max(1);
    let high = (current + 1).min(total);
    kept.extend(low..=high);

    let mut slots = Vec::with_capacity(kept.len() * 2);
    let mut previous: Option<usize> = None;
    for page in kept {
        if previous.is_some_and(|prev| page - prev > 1) {
            slots.push(PageSlot::Ellipsis);
        }
        slots.push(PageSlot::Page(page));
        previous = Some(page);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::PageSlot::{Ellipsis, Page};
    use super::*;

    #[test]
    fn short_ranges_list_every_page() {
        assert_eq!(page_slots(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_slots(1, 7).len(), 7);
    }

    #[test]
    fn middle_page_gets_ellipses_on_both_sides() {
        assert_eq!(
            page_slots(10, 20),
            vec![
                Page(1),
                Page(2),
                Ellipsis,
                Page(9),
                Page(10),
                Page(11),
                Ellipsis,
                Page(19),
                Page(20)
            ]
        );
    }

    #[test]
    fn edges_merge_without_ellipsis() {
        assert_eq!(
            page_slots(1, 8),
            vec![Page(1), Page(2), Ellipsis, Page(7), Page(8)]
        );
        assert_eq!(
            page_slots(4, 8),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(7), Page(8)]
        );
    }

    #[test]
    fn boundary_controls_are_disabled_not_removed() {
        let first = pagination(1, 3).unwrap();
        assert!(first.first.disabled && first.prev.disabled);
        assert!(!first.next.disabled && !first.last.disabled);

        let last = pagination(3, 3).unwrap();
        assert!(last.next.disabled && last.last.disabled);
        assert_eq!(last.prev.target, 2);

        assert!(pagination(1, 1).is_none());
    }
}
