use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use catalog_core::{update, AppState, FocusTarget, Msg, RecordKey, Repository, Settings};
use catalog_logging::catalog_debug;

use super::dom::{Document, RegionId};
use super::effects::EffectRunner;
use super::history::History;
use super::persistence::PreferenceStore;
use super::ui;

/// One headless browser tab: core state, document, address bar and timers.
pub struct Browser {
    state: AppState,
    document: Document,
    history: History,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl Browser {
    /// Loads the page at `location` and renders it.
    pub fn open(
        repository: Arc<Repository>,
        settings: Settings,
        location: &str,
        preferences: PreferenceStore,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let mut document = Document::new();
        document.apply_all(ui::layout::initial_commands(&repository));
        let theme = preferences.load_theme();

        let mut browser = Self {
            state: AppState::new(repository, settings),
            document,
            history: History::new(location),
            effects: EffectRunner::new(msg_tx, preferences),
            msg_rx,
        };
        let location = browser.history.current().to_string();
        browser.dispatch_msg(Msg::Started { location, theme });
        browser
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Delivers a user event and any messages it posts immediately.
    /// Returns the regions that changed.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<RegionId> {
        let mut changed = self.dispatch_msg(msg);
        merge(&mut changed, self.process_pending_messages());
        changed
    }

    /// Runs timers for up to `duration`, delivering what they post.
    pub fn wait(&mut self, duration: Duration) -> Vec<RegionId> {
        let deadline = Instant::now() + duration;
        let mut changed = Vec::new();
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => merge(&mut changed, self.dispatch_msg(msg)),
                Err(mpsc::RecvTimeoutError::Timeout) => break,
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
        changed
    }

    pub fn back(&mut self) -> Vec<RegionId> {
        match self.history.back().map(str::to_string) {
            Some(location) => self.dispatch(Msg::Navigated(location)),
            None => Vec::new(),
        }
    }

    pub fn forward(&mut self) -> Vec<RegionId> {
        match self.history.forward().map(str::to_string) {
            Some(location) => self.dispatch(Msg::Navigated(location)),
            None => Vec::new(),
        }
    }

    /// Click (or Enter) on a card: focus moves to it, then the modal opens.
    pub fn activate_card(&mut self, key: RecordKey) -> Vec<RegionId> {
        self.document.set_focus(FocusTarget::Card(key.clone()));
        let mut changed = self.dispatch(Msg::FocusChanged(FocusTarget::Card(key.clone())));
        merge(&mut changed, self.dispatch(Msg::CardActivated(key)));
        changed
    }

    pub fn focus(&mut self, target: FocusTarget) -> Vec<RegionId> {
        self.document.set_focus(target.clone());
        self.dispatch(Msg::FocusChanged(target))
    }

    pub fn scroll(&mut self, offset: u32) -> Vec<RegionId> {
        self.document.set_scroll_y(offset);
        self.dispatch(Msg::Scrolled { offset })
    }

    fn process_pending_messages(&mut self) -> Vec<RegionId> {
        let mut changed = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            merge(&mut changed, self.dispatch_msg(msg));
        }
        changed
    }

    fn dispatch_msg(&mut self, msg: Msg) -> Vec<RegionId> {
        catalog_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects
            .run(effects, &mut self.document, &mut self.history);

        let changed = if state.consume_dirty() {
            self.document.apply_all(ui::render::render(&state.view()))
        } else {
            Vec::new()
        };
        self.state = state;
        changed
    }
}

/// Appends the ids in `more` not already in `into`.
pub(crate) fn merge(into: &mut Vec<RegionId>, more: Vec<RegionId>) {
    for id in more {
        if !into.contains(&id) {
            into.push(id);
        }
    }
}
