use std::fs;
use std::path::PathBuf;

use catalog_core::Theme;
use catalog_engine::write_atomic;
use catalog_logging::{catalog_error, catalog_info, catalog_warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct Preferences {
    #[serde(default)]
    theme: Theme,
}

/// Theme preference file, standing in for the browser's local storage.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Stored theme, or the default when the file is missing or unreadable.
    pub fn load_theme(&self) -> Theme {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Theme::default(),
            Err(err) => {
                catalog_warn!("Failed to read preferences from {:?}: {}", self.path, err);
                return Theme::default();
            }
        };

        match ron::from_str::<Preferences>(&content) {
            Ok(prefs) => {
                catalog_info!("Loaded theme {} from {:?}", prefs.theme.as_str(), self.path);
                prefs.theme
            }
            Err(err) => {
                catalog_warn!("Failed to parse preferences from {:?}: {}", self.path, err);
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) {
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&Preferences { theme }, pretty) {
            Ok(text) => text,
            Err(err) => {
                catalog_error!("Failed to serialize preferences: {}", err);
                return;
            }
        };

        if let Err(err) = write_atomic(&self.path, &content) {
            catalog_error!("Failed to write preferences to {:?}: {}", self.path, err);
        }
    }
}
