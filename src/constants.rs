//! Application constants.
//!
//! Centralizes endpoints, defaults and user-facing messages.

/// External service endpoints.
pub mod endpoints {
    /// Base of Bible.com deep links; version id and passage are appended.
    pub const LINK_BASE: &str = "https://www.bible.com/bible";

    /// Base of the verse data API (World English Bible text).
    pub const VERSE_API_BASE: &str = "https://bible-api.com/data/web";

    /// Default HTTP timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Settings defaults.
pub mod defaults {
    /// Version label used when none is configured or the label is unknown.
    pub const VERSION: &str = "NIV";

    /// Whether verse previews are inserted after the link.
    pub const ADD_PREVIEW: bool = true;

    /// Settings file name inside the config directory.
    pub const SETTINGS_FILE: &str = "settings.json";

    /// Directory name under the platform config dir.
    pub const APP_DIR: &str = "verselink";
}

/// Command entry point descriptor.
pub mod command {
    /// Stable command id.
    pub const ID: &str = "link-bible-verses";

    /// Display name of the command.
    pub const NAME: &str = "Link to Bible.com";
}

/// Notices shown to the user.
pub mod notices {
    /// Selection does not parse as a reference.
    pub const INVALID_REFERENCE: &str = "Please select a valid Bible reference (e.g. John 3:16)";

    /// Book name is not in the book table.
    pub const UNKNOWN_BOOK: &str = "Invalid book name. Please check the reference and try again.";

    /// Link inserted without a preview.
    pub const PREVIEW_DISABLED: &str = "Bible reference linked. Verse preview is disabled.";

    /// Link inserted but the preview could not be started.
    pub const PREVIEW_UNAVAILABLE: &str = "Bible reference linked. Verse preview is unavailable.";

    /// Verse API unreachable or returned an error.
    pub const FETCH_FAILED: &str = "Failed to fetch verse. Please check your internet connection.";

    /// Verse API answered but did not contain the verse.
    pub const VERSE_NOT_FOUND: &str = "Verse not found. Please check the reference.";
}
