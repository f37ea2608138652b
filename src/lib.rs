//! `verselink` - turn Bible references into Bible.com links.
//!
//! Parses a selected reference such as `1st Corinthians 13:4`, resolves the
//! book against a fixed table, formats a Bible.com deep link for the chosen
//! translation, and can inline the verse text fetched from bible-api.com.

pub mod bible;
pub mod config;
pub mod constants;
pub mod error;
pub mod linker;
pub mod services;
pub mod settings;

pub use error::{Error, Result};
pub use linker::{BibleLinker, Link, Preview};
pub use settings::{Settings, SettingsStore};
