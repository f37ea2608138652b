//! Reference parsing for selections like `John 3:16` or `1st Corinthians 13:4-7`.

use std::sync::LazyLock;

use regex::Regex;

/// Whole-selection shape: optional ordinal, alphabetic book words, verse token.
#[allow(clippy::expect_used)]
static RE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-3]?\s?[A-Za-z\s]+)\s(\d+:\d+(-\d+)?)$").expect("valid regex: RE_REFERENCE")
});

/// Ordinal suffixes to strip, keeping the digit.
#[allow(clippy::expect_used)]
static RE_ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(1)st|(2)nd|(3)rd").expect("valid regex: RE_ORDINAL")
});

/// A parsed reference, before book resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibleReference {
    /// Book name joined without spaces, lowercased, ordinals reduced to digits.
    pub book_name: String,
    /// `chapter:verse` or `chapter:verse-verse`, verbatim from the selection.
    pub verse_token: String,
}

/// Parse a trimmed selection into a book name and verse token.
///
/// Returns `None` when the selection does not have the reference shape.
/// Never returns a partial result.
pub fn parse_reference(text: &str) -> Option<BibleReference> {
    if !RE_REFERENCE.is_match(text) {
        return None;
    }

    let parts: Vec<&str> = text.split_whitespace().collect();
    let (verse_token, book_words) = parts.split_last()?;

    let joined = book_words.concat().to_lowercase();
    let book_name = RE_ORDINAL.replace_all(&joined, "$1$2$3").into_owned();

    Some(BibleReference {
        book_name,
        verse_token: (*verse_token).to_string(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_simple_ref() {
        let r = parse_reference("John 3:16").unwrap();
        assert_eq!(r.book_name, "john");
        assert_eq!(r.verse_token, "3:16");
    }

    #[test]
    fn test_parse_range() {
        let r = parse_reference("Isaiah 32:15-17").unwrap();
        assert_eq!(r.book_name, "isaiah");
        assert_eq!(r.verse_token, "32:15-17");
    }

    #[test]
    fn test_parse_numbered_book() {
        assert_eq!(parse_reference("2 Samuel 1:1").unwrap().book_name, "2samuel");
        assert_eq!(parse_reference("1John 4:8").unwrap().book_name, "1john");
    }

    #[test]
    fn test_ordinal_suffixes_are_stripped() {
        assert_eq!(parse_reference("1st Corinthians 13:4").unwrap().book_name, "1corinthians");
        assert_eq!(parse_reference("2nd Timothy 3:16").unwrap().book_name, "2timothy");
        assert_eq!(parse_reference("3rd John 1:2").unwrap().book_name, "3john");
    }

    #[test]
    fn test_multi_word_book() {
        let r = parse_reference("Song of Songs 2:4").unwrap();
        assert_eq!(r.book_name, "songofsongs");
        assert_eq!(r.verse_token, "2:4");
    }

    #[test]
    fn test_rejects_non_references() {
        for bad in [
            "Psalm",
            "John 3",
            "42 Funny:16",
            "4 Kings 1:1",
            "John 3:16,18",
            "John 3:16-4:2",
            "Jean-Paul 3:16",
            "",
            "3:16",
        ] {
            assert!(parse_reference(bad).is_none(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_verse_token_is_verbatim() {
        for (input, token) in [("Psalm 119:105", "119:105"), ("Jude 1:24-25", "1:24-25")] {
            assert_eq!(parse_reference(input).unwrap().verse_token, token);
        }
    }
}
