//! Bible.com deep-link formatting.

use super::versions;
use crate::constants::endpoints;

/// Format a Bible.com link for a canonical book, verse token and version label.
///
/// Unknown version labels fall back to the default version.
pub fn format_url(book_code: &str, verse_token: &str, version: &str) -> String {
    format_url_with_base(endpoints::LINK_BASE, book_code, verse_token, version)
}

/// Like [`format_url`], against a custom link base (e.g. a mirror).
pub fn format_url_with_base(base: &str, book_code: &str, verse_token: &str, version: &str) -> String {
    let version_id = versions::version_id(version);
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        version_id,
        passage_segment(book_code, verse_token)
    )
}

/// `JHN` + `3:16-18` -> `JHN.3.16-18`
fn passage_segment(book_code: &str, verse_token: &str) -> String {
    format!("{}.{}", book_code, verse_token.replacen(':', ".", 1))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::bible::{parse_reference, resolve_book};

    #[test]
    fn formats_single_verse() {
        assert_eq!(format_url("JHN", "3:16", "NIV"), "https://www.bible.com/bible/111/JHN.3.16");
    }

    #[test]
    fn keeps_range_hyphen() {
        assert_eq!(format_url("JHN", "3:16-18", "KJV"), "https://www.bible.com/bible/1/JHN.3.16-18");
    }

    #[test]
    fn unknown_version_matches_default() {
        assert_eq!(format_url("ROM", "8:28", "UNKNOWN_LABEL"), format_url("ROM", "8:28", "NIV"));
    }

    #[test]
    fn custom_base_tolerates_trailing_slash() {
        assert_eq!(
            format_url_with_base("http://localhost:8080/bible/", "GEN", "1:1", "ESV"),
            "http://localhost:8080/bible/59/GEN.1.1"
        );
    }

    #[test]
    fn parse_resolve_format_pipeline() {
        for input in ["John 3:16", "1st Corinthians 13:4-7", "Song of Songs 2:4", "Psalm 23:1"] {
            let parsed = parse_reference(input).unwrap();
            let book = resolve_book(&parsed.book_name).unwrap();
            let url = format_url(book, &parsed.verse_token, "NIV");
            let passage = url.strip_prefix("https://www.bible.com/bible/111/").unwrap();
            assert!(passage.starts_with(book), "{url}");
            assert!(!passage.contains(':') && !passage.contains(' '), "{url}");
        }
    }
}
