pub mod app;
pub mod config;
pub mod dom;
pub mod effects;
pub mod history;
pub mod logging;
pub mod persistence;
pub mod ui;

pub use app::Browser;
pub use config::{AppConfig, ConfigError};
pub use dom::{Document, DomCommand, RegionId};
pub use history::History;
pub use persistence::PreferenceStore;
