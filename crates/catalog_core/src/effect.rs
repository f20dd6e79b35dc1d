use std::time::Duration;

use crate::modal::FocusTarget;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Add a history entry for this canonical query string.
    PushUrl { query: String },
    /// Deliver `Msg::SearchDebounceElapsed { ticket }` after `delay`.
    ScheduleSearch { ticket: u64, delay: Duration },
    Focus(FocusTarget),
    ScrollToTop,
    /// Deliver `Msg::AnimationFrame` on the next frame.
    RequestAnimationFrame,
    PersistTheme(Theme),
}
