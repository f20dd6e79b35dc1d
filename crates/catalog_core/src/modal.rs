//! Detail dialog with a focus trap, independent of filter and page state.

use url::Url;

use crate::record::{ContentRecord, RecordKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalControl {
    Close,
    ViewLink,
    Download,
}

/// Element holding keyboard focus, as far as the controller needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FocusTarget {
    #[default]
    Body,
    SearchInput,
    Card(RecordKey),
    Modal(ModalControl),
}

impl FocusTarget {
    pub fn is_text_input(&self) -> bool {
        matches!(self, FocusTarget::SearchInput)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    open: Option<RecordKey>,
    return_focus: Option<FocusTarget>,
    controls: Vec<ModalControl>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn record_key(&self) -> Option<&RecordKey> {
        self.open.as_ref()
    }

    /// Opens the dialog for `record`, remembering `focused` for restoration.
    /// Returns the control that should receive focus.
    pub fn open(&mut self, record: &ContentRecord, focused: FocusTarget) -> FocusTarget {
        let mut controls = vec![ModalControl::Close];
        if record.view_url().is_some() {
            controls.push(ModalControl::ViewLink);
        }
        if record.download().is_some() {
            controls.push(ModalControl::Download);
        }
        // Reopening over an open dialog keeps the original return target.
        if self.open.is_none() {
            self.return_focus = Some(focused);
        }
        self.open = Some(record.key());
        self.controls = controls;
        FocusTarget::Modal(ModalControl::Close)
    }

    /// Closes the dialog; returns the element to refocus.
    pub fn close(&mut self) -> Option<FocusTarget> {
        self.open.take()?;
        self.controls.clear();
        self.return_focus.take()
    }

    /// Next focus for Tab (or Shift+Tab when `backwards`), wrapping inside the dialog.
    pub fn cycle(&self, focused: &FocusTarget, backwards: bool) -> FocusTarget {
        let count = self.controls.len();
        if count == 0 {
            return FocusTarget::Modal(ModalControl::Close);
        }
        let position = match focused {
            FocusTarget::Modal(control) => self.controls.iter().position(|c| c == control),
            _ => None,
        };
        let next = match (position, backwards) {
            (None, false) => 0,
            (None, true) => count - 1,
            (Some(index), false) => (index + 1) % count,
            (Some(index), true) => (index + count - 1) % count,
        };
        FocusTarget::Modal(self.controls[next])
    }
}

/// Resolves `raw` against `base` and keeps it only when the result is http(s).
pub fn sanitize_link(raw: &str, base: Option<&Url>) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = match base {
        Some(base) => base.join(raw),
        None => Url::parse(raw),
    }
    .ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Platform;

    fn record(url: &str, download: Option<&str>) -> ContentRecord {
        ContentRecord {
            id: "0001".into(),
            platform: Platform::LinkedIn,
            title: "Nested IFs".into(),
            url: url.into(),
            tags: vec!["excel".into()],
            download_url: download.map(str::to_string),
        }
    }

    #[test]
    fn tab_wraps_in_both_directions() {
        let mut modal = ModalState::default();
        let start = modal.open(
            &record("https://example.com", Some("files.zip")),
            FocusTarget::SearchInput,
        );
        assert_eq!(start, FocusTarget::Modal(ModalControl::Close));

        let download = FocusTarget::Modal(ModalControl::Download);
        assert_eq!(modal.cycle(&start, true), download);
        assert_eq!(modal.cycle(&download, false), start);
        assert_eq!(
            modal.cycle(&start, false),
            FocusTarget::Modal(ModalControl::ViewLink)
        );
    }

    #[test]
    fn only_close_is_focusable_without_links() {
        let mut modal = ModalState::default();
        let start = modal.open(&record("", None), FocusTarget::Body);
        assert_eq!(modal.cycle(&start, false), start);
        assert_eq!(modal.cycle(&start, true), start);
    }

    #[test]
    fn close_restores_captured_focus_once() {
        let mut modal = ModalState::default();
        let card = FocusTarget::Card(RecordKey::new(Platform::LinkedIn, "0001"));
        modal.open(&record("", None), card.clone());
        assert_eq!(modal.close(), Some(card));
        assert_eq!(modal.close(), None);
        assert!(!modal.is_open());
    }

    #[test]
    fn sanitize_allows_only_http_schemes() {
        let base = Url::parse("https://site.example/catalog/").unwrap();
        assert_eq!(
            sanitize_link("content/linkedin/0001/Files.zip", Some(&base)).as_deref(),
            Some("https://site.example/catalog/content/linkedin/0001/Files.zip")
        );
        assert_eq!(sanitize_link("javascript:alert(1)", Some(&base)), None);
        assert_eq!(sanitize_link("data:text/html,hi", None), None);
        assert_eq!(sanitize_link("relative/path", None), None);
        assert_eq!(
            sanitize_link("http://example.com/a", None).as_deref(),
            Some("http://example.com/a")
        );
        assert_eq!(sanitize_link("   ", Some(&base)), None);
    }
}
