//! User preferences, kept next to (but separate from) the student data.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::io::repository::APP_FOLDER_NAME;

/// Persisted user settings (lives in the OS config directory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub dark_mode: bool,
    /// Ask before deleting a student.
    pub confirm_delete: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            confirm_delete: true,
        }
    }
}

impl AppSettings {
    /// `settings.json` in the OS config directory, or the working directory
    /// when no home directory is known.
    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", APP_FOLDER_NAME) {
            proj_dirs.config_dir().join("settings.json")
        } else {
            PathBuf::from(".").join("settings.json")
        }
    }

    /// Read settings, falling back to defaults if the file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Best-effort write; failures are logged, never surfaced.
    pub fn save(&self, path: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "could not serialize settings");
                return;
            }
        };
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                warn!(path = %dir.display(), error = %e, "could not create settings directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(path, json) {
            warn!(path = %path.display(), error = %e, "could not write settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_corrupt_file_gives_defaults() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("settings.json");
        assert_eq!(AppSettings::load(&path), AppSettings::default());

        std::fs::write(&path, "{ not json").expect("write");
        assert_eq!(AppSettings::load(&path), AppSettings::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "dark_mode": false }"#).expect("write");

        let settings = AppSettings::load(&path);
        assert!(!settings.dark_mode);
        assert!(settings.confirm_delete);
    }

    #[test]
    fn default_path_is_a_settings_file() {
        assert!(AppSettings::default_path().ends_with("settings.json"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            dark_mode: false,
            confirm_delete: false,
        };
        settings.save(&path);
        assert_eq!(AppSettings::load(&path), settings);
    }
}
