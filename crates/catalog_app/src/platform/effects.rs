use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use catalog_core::{Effect, Msg};
use catalog_logging::{catalog_debug, catalog_info, catalog_trace};

use super::dom::Document;
use super::history::History;
use super::persistence::PreferenceStore;

/// Delay standing in for the next animation frame.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Executes core effects against the headless page; timers post messages back.
pub struct EffectRunner {
    msg_tx: mpsc::Sender<Msg>,
    preferences: PreferenceStore,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, preferences: PreferenceStore) -> Self {
        Self {
            msg_tx,
            preferences,
        }
    }

    pub fn run(&self, effects: Vec<Effect>, document: &mut Document, history: &mut History) {
        for effect in effects {
            match effect {
                Effect::PushUrl { query } => {
                    catalog_info!("history push ?{}", query);
                    history.push(query);
                }
                Effect::ScheduleSearch { ticket, delay } => {
                    catalog_trace!("search ticket {} due in {:?}", ticket, delay);
                    self.post_after(delay, Msg::SearchDebounceElapsed { ticket });
                }
                Effect::Focus(target) => {
                    catalog_debug!("focus {:?}", target);
                    document.set_focus(target);
                }
                Effect::ScrollToTop => {
                    if document.scroll_y() != 0 {
                        document.set_scroll_y(0);
                        let _ = self.msg_tx.send(Msg::Scrolled { offset: 0 });
                    }
                }
                Effect::RequestAnimationFrame => self.post_after(FRAME_INTERVAL, Msg::AnimationFrame),
                Effect::PersistTheme(theme) => self.preferences.save_theme(theme),
            }
        }
    }

    fn post_after(&self, delay: Duration, msg: Msg) {
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = msg_tx.send(msg);
        });
    }
}
