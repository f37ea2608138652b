//! Verse text lookup against the bible-api.com data endpoint.
//!
//! The endpoint is queried per chapter; the requested verse is picked out of
//! the response locally.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, Result};

/// One verse as returned by the verse API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerseEntry {
    /// API book id (e.g. "JHN").
    #[serde(default)]
    pub book_id: String,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
    /// Verse text.
    pub text: String,
}

/// Verse API response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChapterData {
    /// Verses contained in the response.
    #[serde(default)]
    pub verses: Vec<VerseEntry>,
}

/// Source of verse text.
#[async_trait]
pub trait VerseFetcher: Send + Sync {
    /// Fetch the verses the service returns for `book_code` and `verse_token`.
    async fn fetch_chapter(&self, book_code: &str, verse_token: &str) -> Result<ChapterData>;

    /// Fetch a single verse; only the first verse of a range is looked up.
    async fn fetch_verse(&self, book_code: &str, verse_token: &str) -> Result<VerseEntry> {
        let data = self.fetch_chapter(book_code, verse_token).await?;
        find_verse(&data, verse_token).cloned()
    }
}

/// Split `3:16` or `3:16-18` into chapter and first verse.
fn chapter_and_verse(verse_token: &str) -> Option<(u32, u32)> {
    let (chapter, verses) = verse_token.split_once(':')?;
    let verse = verses.split('-').next()?;
    Some((chapter.parse().ok()?, verse.parse().ok()?))
}

/// Find the verse named by `verse_token` in a chapter response.
pub fn find_verse<'a>(data: &'a ChapterData, verse_token: &str) -> Result<&'a VerseEntry> {
    let (chapter, verse) = chapter_and_verse(verse_token)
        .ok_or_else(|| Error::InvalidReference { input: verse_token.to_string() })?;

    data.verses
        .iter()
        .find(|v| v.chapter == chapter && v.verse == verse)
        .ok_or(Error::VerseNotFound { chapter, verse })
}

/// Render verse text as a Markdown block quote on a new line.
pub fn format_preview(text: &str) -> String {
    let clean_text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("\n> {clean_text}")
}

/// Client for the bible-api.com verse data endpoint.
#[derive(Debug, Clone)]
pub struct BibleApiClient {
    base_url: String,
    client: Client,
}

impl BibleApiClient {
    /// Create a client from config
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(&config.verse_api_base, config.timeout_secs)
    }

    /// Create a client against a specific base URL.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Request URL; `BOOK/chapter:verse` is percent-encoded as a single path
    /// segment (`JHN%2F3%3A16`).
    pub fn endpoint(&self, book_code: &str, verse_token: &str) -> Result<Url> {
        let hint = "Set VERSELINK_VERSE_API to an absolute http(s) URL";
        let base = Url::parse(&self.base_url).map_err(|e| {
            Error::config(format!("Invalid verse API base {:?}: {e}", self.base_url), hint)
        })?;
        if base.cannot_be_a_base() {
            return Err(Error::config(
                format!("Verse API base {:?} cannot take a path", self.base_url),
                hint,
            ));
        }

        let segment = urlencoding::encode(&format!("{book_code}/{verse_token}")).into_owned();
        let joined = format!("{}/{segment}", base.as_str().trim_end_matches('/'));
        Url::parse(&joined).map_err(|e| Error::config(format!("Invalid verse URL {joined:?}: {e}"), hint))
    }
}

#[async_trait]
impl VerseFetcher for BibleApiClient {
    async fn fetch_chapter(&self, book_code: &str, verse_token: &str) -> Result<ChapterData> {
        let url = self.endpoint(book_code, verse_token)?;
        tracing::debug!(%url, "Fetching verse data");

        let resp = self.client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http { status: status.as_u16(), url: url.to_string() });
        }

        resp.json().await
            .map_err(|e| Error::parse(format!("Invalid JSON from {url}: {e}"), None))
    }
}
