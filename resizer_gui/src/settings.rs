//! Layout settings file.
//!
//! Stored as `layout.json` in the platform config directory
//! (`~/.config/sidebar-resizer` on Linux, `%APPDATA%\sidebar-resizer\config`
//! on Windows, `~/Library/Application Support/sidebar-resizer` on macOS).

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use resizer_core::errors::ResizeResult;
use resizer_core::file_io::{load_layout, save_layout};
use resizer_core::layout::PanelLayout;
use tracing::{info, warn};

const APP_DIR: &str = "sidebar-resizer";
const FILE_NAME: &str = "layout.json";

fn config_dir() -> PathBuf {
    match ProjectDirs::from("", "", APP_DIR) {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => {
            let fallback = std::env::temp_dir().join(APP_DIR);
            warn!("[settings] no home directory found, storing layout in {:?}", fallback);
            fallback
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        SettingsStore { path }
    }

    /// Store at the default config location
    pub fn from_env() -> Self {
        Self::new(config_dir().join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved layout. A missing or unreadable file yields the defaults.
    pub fn load_or_default(&self) -> PanelLayout {
        if !self.path.exists() {
            info!("[settings] no saved layout at {:?}, using defaults", self.path);
            return PanelLayout::default();
        }
        load_layout(&self.path).unwrap_or_else(|e| {
            warn!("[settings] {} ({}), using defaults", e, e.error_code());
            PanelLayout::default()
        })
    }

    pub fn save(&self, layout: &PanelLayout) -> ResizeResult<()> {
        save_layout(layout, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_absolute() {
        let store = SettingsStore::from_env();
        assert!(store.path().is_absolute(), "{:?}", store.path());
        assert!(store.path().ends_with(FILE_NAME));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join(FILE_NAME));
        assert_eq!(store.load_or_default(), PanelLayout::default());
    }

    #[test]
    fn corrupted_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        std::fs::write(&path, "[]").unwrap();

        assert_eq!(SettingsStore::new(path).load_or_default(), PanelLayout::default());
    }

    #[test]
    fn saved_width_is_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join(FILE_NAME));

        let mut layout = PanelLayout::default();
        layout.set_sidebar_width(512.0);
        store.save(&layout).unwrap();

        assert_eq!(store.load_or_default().sidebar_width, 512.0);
    }
}
