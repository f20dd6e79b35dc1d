#![deny(missing_docs)]
//! Shared logging utilities for the catalog workspace.
//!
//! Provides the `catalog_*` logging macros used across the crates, a per-thread
//! render-cycle counter for correlating log lines with pipeline runs, and a
//! tolerant initializer for tests.

use std::cell::Cell;

#[doc(hidden)]
pub use log as __log;

thread_local! {
    /// Number of pipeline runs completed on this thread.
    static RENDER_CYCLE: Cell<u64> = const { Cell::new(0) };
}

/// Records the render cycle reached by the pipeline on the current thread.
pub fn set_render_cycle(cycle: u64) {
    RENDER_CYCLE.with(|v| v.set(cycle));
}

/// Returns the last render cycle recorded on the current thread, or 0.
pub fn render_cycle() -> u64 {
    RENDER_CYCLE.with(|v| v.get())
}

/// Logs a trace-level message prefixed with the current render cycle.
#[macro_export]
macro_rules! catalog_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!("[cycle {}] {}", $crate::render_cycle(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message prefixed with the current render cycle.
#[macro_export]
macro_rules! catalog_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!("[cycle {}] {}", $crate::render_cycle(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message.
#[macro_export]
macro_rules! catalog_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// Logs a warn-level message.
#[macro_export]
macro_rules! catalog_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!($($arg)*);
    }};
}

/// Logs an error-level message.
#[macro_export]
macro_rules! catalog_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!($($arg)*);
    }};
}

/// Initializes a terminal logger for tests.
///
/// Safe to call from every test; only the first call installs a logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // A logger installed by an earlier test is fine.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}

#[cfg(test)]
mod tests {
    use super::{render_cycle, set_render_cycle};

    #[test]
    fn render_cycle_is_thread_local() {
        set_render_cycle(7);
        assert_eq!(render_cycle(), 7);
        let other = std::thread::spawn(render_cycle).join().unwrap();
        assert_eq!(other, 0);
    }

    #[test]
    fn repeated_initialization_is_harmless() {
        super::initialize_for_tests();
        super::initialize_for_tests();
        catalog_debug!("logger ready {}", 1);
    }
}
