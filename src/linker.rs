//! Link a selected Bible reference and optionally inline the verse text.
//!
//! `link_selection` runs parse -> resolve -> format and rewrites the selection
//! synchronously. The verse preview is fetched on a detached task; the caller
//! gets a [`Preview`] handle for that one link and applies it to the editor
//! the link was made in, so the link is in place before the network answers.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::bible::{format_url_with_base, parse_reference, resolve_book};
use crate::config::Config;
use crate::constants::{endpoints, notices};
use crate::error::{Error, Result};
use crate::services::scripture::{format_preview, VerseEntry};
use crate::services::{Editor, Notifier, VerseFetcher};
use crate::settings::Settings;

/// A link that was committed to the editor.
#[derive(Debug)]
pub struct Link {
    /// The Markdown that replaced the selection.
    pub markdown: String,
    /// The Bible.com URL.
    pub url: String,
    /// Pending verse preview, when previews are enabled.
    pub preview: Option<Preview>,
}

/// An in-flight verse fetch belonging to one link.
#[derive(Debug)]
pub struct Preview {
    reference: String,
    task: JoinHandle<Result<VerseEntry>>,
}

impl Preview {
    /// The selection text the link was made from.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Whether the fetch has settled, so `apply` will not wait.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the fetch and insert the quoted verse at the editor's cursor.
    ///
    /// `editor` is the one the link went into. Failures are reported through
    /// `notifier`. Returns whether text was inserted.
    pub async fn apply(self, editor: &mut dyn Editor, notifier: &dyn Notifier) -> bool {
        let result = match self.task.await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Preview task for {} did not complete: {e}", self.reference);
                Err(Error::Network(format!("preview task failed: {e}")))
            }
        };

        match result {
            Ok(verse) => {
                tracing::debug!("Inserting preview for {}", self.reference);
                let cursor = editor.cursor();
                editor.replace_range(&format_preview(&verse.text), cursor);
                true
            }
            Err(e) => {
                notifier.notify(&e.notice());
                false
            }
        }
    }
}

/// What a preview needs to fetch, captured when the link is made.
struct PreviewTarget {
    reference: String,
    book: &'static str,
    verse_token: String,
}

/// Orchestrates reference linking for one editor host.
pub struct BibleLinker {
    settings: Settings,
    link_base: String,
    fetcher: Arc<dyn VerseFetcher>,
}

impl BibleLinker {
    /// Create a linker with the given settings and verse source.
    pub fn new(settings: Settings, fetcher: Arc<dyn VerseFetcher>) -> Self {
        Self {
            settings,
            link_base: endpoints::LINK_BASE.to_string(),
            fetcher,
        }
    }

    /// Create a linker whose links point at the configured link base.
    pub fn from_config(config: &Config, settings: Settings, fetcher: Arc<dyn VerseFetcher>) -> Self {
        let mut linker = Self::new(settings, fetcher);
        linker.link_base.clone_from(&config.link_base);
        linker
    }

    /// Current settings.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable settings, for the settings UI.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Turn the editor's selection into a Bible.com link.
    ///
    /// Every failure is also reported through `notifier`; the editor is only
    /// modified once the reference has parsed and resolved. Outside a tokio
    /// runtime the link is still made but no preview is started.
    pub fn link_selection(&self, editor: &mut dyn Editor, notifier: &dyn Notifier) -> Result<Link> {
        let (mut link, target) = match self.try_link(editor) {
            Ok(linked) => linked,
            Err(e) => {
                tracing::debug!("Not linking selection: {e}");
                notifier.notify(&e.notice());
                return Err(e);
            }
        };

        if self.settings.add_preview {
            link.preview = self.spawn_preview(target, notifier);
        } else {
            notifier.notify(notices::PREVIEW_DISABLED);
        }
        Ok(link)
    }

    fn try_link(&self, editor: &mut dyn Editor) -> Result<(Link, PreviewTarget)> {
        let selection = editor.selection();
        let selected = selection.trim();

        let reference = parse_reference(selected)
            .ok_or_else(|| Error::InvalidReference { input: selected.to_string() })?;
        let book = resolve_book(&reference.book_name)
            .ok_or_else(|| Error::UnknownBook { name: reference.book_name.clone() })?;

        let version = &self.settings.version;
        let url = format_url_with_base(&self.link_base, book, &reference.verse_token, version);
        let markdown = format!("[{selected} ({version})]({url})");
        editor.replace_selection(&markdown);
        tracing::info!("Linked {selected} -> {url}");

        let target = PreviewTarget {
            reference: selected.to_string(),
            book,
            verse_token: reference.verse_token,
        };
        Ok((Link { markdown, url, preview: None }, target))
    }

    /// Fetch the verse on a detached task owned by the returned handle.
    fn spawn_preview(&self, target: PreviewTarget, notifier: &dyn Notifier) -> Option<Preview> {
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("No async runtime; skipping preview for {}", target.reference);
            notifier.notify(notices::PREVIEW_UNAVAILABLE);
            return None;
        };

        let fetcher = Arc::clone(&self.fetcher);
        let PreviewTarget { reference, book, verse_token } = target;
        let label = reference.clone();

        let task = runtime.spawn(async move {
            let result = fetcher.fetch_verse(book, &verse_token).await;
            if let Err(e) = &result {
                tracing::warn!("Preview for {label} failed: {e}");
            }
            result
        });

        Some(Preview { reference, task })
    }
}
