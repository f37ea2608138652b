//! Version table: translation labels to Bible.com numeric version ids.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::constants::defaults;

/// Supported translations in display order, with their Bible.com ids.
const VERSIONS: &[(&str, &str)] = &[
    ("NIV", "111"),
    ("KJV", "1"),
    ("NKJV", "114"),
    ("ESV", "59"),
    ("NLT", "116"),
    ("NASB", "2692"),
    ("NASB1995", "100"),
    ("CSB", "1713"),
    ("NRSV", "2016"),
    ("NRSVUE", "3523"),
    ("RSV", "2020"),
    ("AMP", "1588"),
    ("MSG", "97"),
    ("NET", "107"),
    ("ASV", "12"),
    ("WEB", "206"),
    ("BSB", "3034"),
    ("LSB", "3345"),
    ("NIRV", "110"),
    ("GNT", "68"),
    ("CEV", "392"),
];

lazy_static! {
    /// Version label -> Bible.com version id. Always contains the default label.
    pub static ref VERSION_MAP: HashMap<&'static str, &'static str> =
        VERSIONS.iter().copied().collect();
}

/// All version labels in display order.
pub fn labels() -> impl Iterator<Item = &'static str> {
    VERSIONS.iter().map(|(label, _)| *label)
}

/// Whether `label` names a known version.
pub fn is_known(label: &str) -> bool {
    VERSION_MAP.contains_key(label)
}

/// Look up the version id for `label`, falling back to the default version.
pub fn version_id(label: &str) -> &'static str {
    VERSION_MAP
        .get(label)
        .or_else(|| VERSION_MAP.get(defaults::VERSION))
        .copied()
        .unwrap_or("111")
}
