//! Book table: normalized book names to Bible.com (USFM) book codes.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Normalized book key -> canonical book code.
    ///
    /// Keys are lowercase, contain no whitespace, and carry ordinals as bare
    /// digits (`1corinthians`, never `1stcorinthians`).
    pub static ref BOOK_MAP: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
    // Law
    m.insert("genesis", "GEN");
    m.insert("gen", "GEN");
    m.insert("exodus", "EXO");
    m.insert("exod", "EXO");
    m.insert("ex", "EXO");
    m.insert("leviticus", "LEV");
    m.insert("lev", "LEV");
    m.insert("numbers", "NUM");
    m.insert("num", "NUM");
    m.insert("deuteronomy", "DEU");
    m.insert("deut", "DEU");
    // History
    m.insert("joshua", "JOS");
    m.insert("josh", "JOS");
    m.insert("judges", "JDG");
    m.insert("judg", "JDG");
    m.insert("ruth", "RUT");
    m.insert("1samuel", "1SA");
    m.insert("1sam", "1SA");
    m.insert("2samuel", "2SA");
    m.insert("2sam", "2SA");
    m.insert("1kings", "1KI");
    m.insert("1kgs", "1KI");
    m.insert("2kings", "2KI");
    m.insert("2kgs", "2KI");
    m.insert("1chronicles", "1CH");
    m.insert("1chr", "1CH");
    m.insert("2chronicles", "2CH");
    m.insert("2chr", "2CH");
    m.insert("ezra", "EZR");
    m.insert("nehemiah", "NEH");
    m.insert("neh", "NEH");
    m.insert("esther", "EST");
    m.insert("esth", "EST");
    // Poetry and wisdom
    m.insert("job", "JOB");
    m.insert("psalm", "PSA");
    m.insert("psalms", "PSA");
    m.insert("ps", "PSA");
    m.insert("proverbs", "PRO");
    m.insert("prov", "PRO");
    m.insert("ecclesiastes", "ECC");
    m.insert("eccl", "ECC");
    m.insert("songofsongs", "SNG");
    m.insert("songofsolomon", "SNG");
    m.insert("song", "SNG");
    // Prophets
    m.insert("isaiah", "ISA");
    m.insert("isa", "ISA");
    m.insert("jeremiah", "JER");
    m.insert("jer", "JER");
    m.insert("lamentations", "LAM");
    m.insert("lam", "LAM");
    m.insert("ezekiel", "EZK");
    m.insert("ezek", "EZK");
    m.insert("daniel", "DAN");
    m.insert("dan", "DAN");
    m.insert("hosea", "HOS");
    m.insert("hos", "HOS");
    m.insert("joel", "JOL");
    m.insert("amos", "AMO");
    m.insert("obadiah", "OBA");
    m.insert("obad", "OBA");
    m.insert("jonah", "JON");
    m.insert("micah", "MIC");
    m.insert("mic", "MIC");
    m.insert("nahum", "NAM");
    m.insert("nah", "NAM");
    m.insert("habakkuk", "HAB");
    m.insert("hab", "HAB");
    m.insert("zephaniah", "ZEP");
    m.insert("zeph", "ZEP");
    m.insert("haggai", "HAG");
    m.insert("hag", "HAG");
    m.insert("zechariah", "ZEC");
    m.insert("zech", "ZEC");
    m.insert("malachi", "MAL");
    m.insert("mal", "MAL");
    // Gospels and Acts
    m.insert("matthew", "MAT");
    m.insert("matt", "MAT");
    m.insert("mark", "MRK");
    m.insert("luke", "LUK");
    m.insert("john", "JHN");
    m.insert("acts", "ACT");
    // Letters
    m.insert("romans", "ROM");
    m.insert("rom", "ROM");
    m.insert("1corinthians", "1CO");
    m.insert("1cor", "1CO");
    m.insert("2corinthians", "2CO");
    m.insert("2cor", "2CO");
    m.insert("galatians", "GAL");
    m.insert("gal", "GAL");
    m.insert("ephesians", "EPH");
    m.insert("eph", "EPH");
    m.insert("philippians", "PHP");
    m.insert("phil", "PHP");
    m.insert("colossians", "COL");
    m.insert("col", "COL");
    m.insert("1thessalonians", "1TH");
    m.insert("1thess", "1TH");
    m.insert("2thessalonians", "2TH");
    m.insert("2thess", "2TH");
    m.insert("1timothy", "1TI");
    m.insert("1tim", "1TI");
    m.insert("2timothy", "2TI");
    m.insert("2tim", "2TI");
    m.insert("titus", "TIT");
    m.insert("philemon", "PHM");
    m.insert("philem", "PHM");
    m.insert("hebrews", "HEB");
    m.insert("heb", "HEB");
    m.insert("james", "JAS");
    m.insert("jas", "JAS");
    m.insert("1peter", "1PE");
    m.insert("1pet", "1PE");
    m.insert("2peter", "2PE");
    m.insert("2pet", "2PE");
    m.insert("1john", "1JN");
    m.insert("2john", "2JN");
    m.insert("3john", "3JN");
    m.insert("jude", "JUD");
    m.insert("revelation", "REV");
    m.insert("revelations", "REV");
    m.insert("rev", "REV");
        m
    };
}

/// Resolve a normalized book name to its canonical code.
///
/// Exact lookup only: no fuzzy matching and no guessed codes for unknown
/// names.
pub fn resolve_book(normalized: &str) -> Option<&'static str> {
    BOOK_MAP.get(normalized).copied()
}
