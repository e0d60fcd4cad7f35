use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths::APP_NAME;
use crate::setlist_manager::SetlistManager;

pub const CURRENT_VERSION: u32 = 1;
const SETTINGS_FILENAME: &str = "config.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Folder scanned for PDFs on startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_dir: Option<String>,

    #[serde(default = "default_zoom")]
    pub default_zoom: f32,

    /// Write the setlist collection back to disk on exit.
    #[serde(default = "default_true")]
    pub autosave_setlists: bool,

    /// Overrides the default `setlists.dat` location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setlists_file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_zoom() -> f32 {
    1.0
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            library_dir: None,
            default_zoom: default_zoom(),
            autosave_setlists: true,
            setlists_file: None,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(SETTINGS_FILENAME))
}

impl Settings {
    /// Load settings from the config dir, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to parse {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = config_path().context("Could not determine config directory")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {parent:?}"))?;
        }
        let content = serde_yaml::to_string(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }

    /// Where the setlist collection is stored for this configuration.
    pub fn setlists_path(&self) -> PathBuf {
        self.setlists_file
            .clone()
            .unwrap_or_else(SetlistManager::default_save_path)
    }
}
