//! Player preferences, persisted as JSON in the platform config directory.

use crate::core::constants::{LEADERBOARD_FILENAME, SETTINGS_FILENAME};
use crate::utils::persistence::{config_dir, load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Terminal bell on collisions, level-ups and game over.
    pub sound_enabled: bool,
    /// Leaderboard file name inside ~/.bollard-striker/.
    pub leaderboard_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: false,
            leaderboard_file: LEADERBOARD_FILENAME.to_string(),
        }
    }
}

impl Settings {
    pub fn default_path() -> io::Result<PathBuf> {
        Ok(config_dir()?.join(SETTINGS_FILENAME))
    }

    /// Load from `path`, falling back to defaults if missing or invalid.
    pub fn load(path: &Path) -> Self {
        let settings: Settings = load_json_or_default(path);
        log::debug!("Settings loaded: {:?}", settings);
        settings
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        save_json(path, self)
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }
}
