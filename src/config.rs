//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{defaults, endpoints};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Where user settings are persisted
    pub settings_path: PathBuf,
    /// Base of generated verse links
    pub link_base: String,
    /// Base of the verse data API
    pub verse_api_base: String,
    /// HTTP timeout for verse fetches, in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings_path: PathBuf::from(defaults::SETTINGS_FILE),
            link_base: endpoints::LINK_BASE.to_string(),
            verse_api_base: endpoints::VERSE_API_BASE.to_string(),
            timeout_secs: endpoints::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        config.settings_path = match env::var("VERSELINK_SETTINGS_PATH") {
            Ok(path) => PathBuf::from(shellexpand::tilde(&path).to_string()),
            Err(_) => default_settings_path()?,
        };

        if let Ok(base) = env::var("VERSELINK_LINK_BASE") {
            config.link_base = base;
        }

        if let Ok(base) = env::var("VERSELINK_VERSE_API") {
            config.verse_api_base = base;
        }

        // Ignore unparsable timeouts rather than failing startup
        if let Ok(secs) = env::var("VERSELINK_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                config.timeout_secs = secs;
            } else {
                tracing::warn!("Ignoring invalid VERSELINK_TIMEOUT_SECS={secs:?}");
            }
        }

        Ok(config)
    }
}

/// `<config dir>/verselink/settings.json`
fn default_settings_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(defaults::APP_DIR).join(defaults::SETTINGS_FILE))
        .ok_or_else(|| Error::config(
            "No platform config directory found",
            "Set VERSELINK_SETTINGS_PATH to choose where settings are stored",
        ))
}
