//! User settings and their JSON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bible::versions;
use crate::constants::defaults;
use crate::error::{Error, Result};

/// User-facing preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Version label used for links (e.g. "NIV").
    pub version: String,
    /// Whether to insert the verse text after the link.
    pub add_preview: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: defaults::VERSION.to_string(),
            add_preview: defaults::ADD_PREVIEW,
        }
    }
}

impl Settings {
    /// Set the version label. Unknown labels are kept but links use the default id.
    pub fn set_version(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !versions::is_known(&label) {
            tracing::warn!("Unknown version {label:?}; links will use {}", defaults::VERSION);
        }
        self.version = label;
    }

    /// Enable or disable verse previews.
    pub fn set_add_preview(&mut self, enabled: bool) {
        self.add_preview = enabled;
    }
}

/// Reads and writes [`Settings`] as a JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; stored keys override defaults, missing keys keep them.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            tracing::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let content = fs_err::read_to_string(&self.path)
            .map_err(|e| Error::io(e, self.path.clone()))?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| Error::parse(e.to_string(), self.path.clone()))?;

        tracing::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Persist settings, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(|e| Error::io(e, parent.to_path_buf()))?;
        }
        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| Error::parse(e.to_string(), self.path.clone()))?;
        fs_err::write(&self.path, content).map_err(|e| Error::io(e, self.path.clone()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let settings = store.load().unwrap();
        assert_eq!(settings, Settings { version: "NIV".into(), add_preview: true });
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"version": "KJV"}"#).unwrap();
        let settings = SettingsStore::new(&path).load().unwrap();
        assert_eq!(settings.version, "KJV");
        assert!(settings.add_preview);

        std::fs::write(&path, r#"{"addPreview": false}"#).unwrap();
        let settings = SettingsStore::new(&path).load().unwrap();
        assert_eq!(settings.version, "NIV");
        assert!(!settings.add_preview);
    }

    #[test]
    fn save_then_load_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nested/verselink/settings.json"));

        let mut settings = Settings::default();
        settings.set_version("ESV");
        settings.set_add_preview(false);
        store.save(&settings).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"addPreview\": false"));
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        match SettingsStore::new(&path).load() {
            Err(Error::Parse { file: Some(file), .. }) => assert_eq!(file, path),
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_version_is_kept() {
        let mut settings = Settings::default();
        settings.set_version("XYZ");
        assert_eq!(settings.version, "XYZ");
    }
}
