//! Application error types.
//!
//! Every failure branch of the linking pipeline maps to one variant here, and
//! each variant knows the notice text shown to the user.

use thiserror::Error;

use crate::constants::notices;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// Selection does not look like `Book chapter:verse`
    #[error("Not a Bible reference: {input:?}")]
    InvalidReference {
        /// The trimmed selection that failed to parse.
        input: String,
    },

    /// Book name is not in the book table
    #[error("Unknown book name: {name:?}")]
    UnknownBook {
        /// The normalized book key that failed to resolve.
        name: String,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Verse API answered with a non-success status
    #[error("Verse API returned HTTP {status} for {url}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Request URL.
        url: String,
    },

    /// Fetch succeeded but the requested verse was not in the response
    #[error("Verse {chapter}:{verse} not found in response")]
    VerseNotFound {
        /// Chapter that was requested.
        chapter: u32,
        /// Verse number that was requested.
        verse: u32,
    },

    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Malformed JSON from the verse API or the settings file
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if any.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Whether the failure happened while talking to the verse API.
    ///
    /// Malformed API payloads count as fetch failures too.
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { .. } | Self::Parse { file: None, .. })
    }

    /// Text shown to the user through the notification collaborator.
    pub fn notice(&self) -> String {
        match self {
            Self::InvalidReference { .. } => notices::INVALID_REFERENCE.to_string(),
            Self::UnknownBook { .. } => notices::UNKNOWN_BOOK.to_string(),
            Self::VerseNotFound { .. } => notices::VERSE_NOT_FOUND.to_string(),
            e if e.is_fetch_failure() => notices::FETCH_FAILED.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn fetch_failures_share_one_notice() {
        let network = Error::Network("connection refused".into());
        let http = Error::Http { status: 503, url: "https://bible-api.com/data/web/x".into() };
        let bad_json = Error::parse("expected value", None);

        assert_eq!(network.notice(), notices::FETCH_FAILED);
        assert_eq!(http.notice(), notices::FETCH_FAILED);
        assert_eq!(bad_json.notice(), notices::FETCH_FAILED);
    }

    #[test]
    fn verse_not_found_is_distinct_from_fetch_failure() {
        let err = Error::VerseNotFound { chapter: 3, verse: 99 };
        assert!(!err.is_fetch_failure());
        assert_eq!(err.notice(), notices::VERSE_NOT_FOUND);
    }

    #[test]
    fn settings_parse_error_is_not_a_fetch_failure() {
        let err = Error::parse("trailing comma", Some(std::path::PathBuf::from("settings.json")));
        assert!(!err.is_fetch_failure());
        assert!(err.notice().contains("settings.json"));
    }

    #[test]
    fn config_errors_carry_hint() {
        let err = Error::config("No config directory", "Set VERSELINK_SETTINGS_PATH");
        assert!(err.to_string().contains("VERSELINK_SETTINGS_PATH"));
    }
}
