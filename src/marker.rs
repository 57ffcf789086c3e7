//! Verse marker scanning.

use once_cell::sync::Lazy;
use regex::Regex;

/// A bracketed verse number, e.g. `[23]`.
pub(crate) static RE_VERSE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([0-9]+)\]").unwrap());

/// One verse marker: its numeric value and byte span in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub number: u32,
    pub start: usize,
    pub end: usize,
}

/// Find every bracketed verse number in the normalized text, leftmost
/// first. Brackets whose contents do not parse as a verse number are not
/// markers; they are simply invisible here, never an error.
pub fn scan_markers(text: &str) -> Vec<Marker> {
    RE_VERSE_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let span = caps.get(0)?;
            let number = caps[1].parse().ok()?;
            Some(Marker {
                number,
                start: span.start(),
                end: span.end(),
            })
        })
        .collect()
}
