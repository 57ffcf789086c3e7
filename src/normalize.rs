//! Raw passage cleanup applied before marker scanning.

use crate::config::SegmenterConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing short-copyright notation, e.g. ` (ESV)` or ` (NIV1984)`.
static RE_COPYRIGHT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*[A-Z][A-Z0-9]{1,11}\s*\)\s*$").unwrap());

/// A bare verse number opening the text without its usual brackets.
static RE_BARE_LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)\s+").unwrap());

/// Clean a provider's raw passage text for scanning: carriage returns out,
/// trailing copyright notation stripped, surrounding whitespace trimmed.
/// A chapter that opens with `"1 ..."` instead of `"[1] ..."` gets its
/// leading number rewritten into marker form so the first verse is not
/// lost.
pub fn normalize_passage(raw: &str, config: &SegmenterConfig) -> String {
    let mut text = raw.replace('\r', "");

    if config.strip_copyright_suffix {
        if let Some(suffix) = RE_COPYRIGHT_SUFFIX.find(&text) {
            let start = suffix.start();
            text.truncate(start);
        }
    }

    let mut text = text.trim().to_string();

    if config.promote_bare_leading_number && RE_BARE_LEADING_NUMBER.is_match(&text) {
        text = RE_BARE_LEADING_NUMBER
            .replace(&text, "[$1] ")
            .into_owned();
    }

    text
}

/// Collapse all runs of whitespace (including line breaks) to single
/// spaces and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str) -> String {
        normalize_passage(raw, &SegmenterConfig::default())
    }

    #[test]
    fn removes_carriage_returns_and_trims() {
        assert_eq!(normalize("  [1] In the beginning\r\n"), "[1] In the beginning");
    }

    #[test]
    fn strips_trailing_copyright_suffix() {
        assert_eq!(
            normalize("[1] And God said, Let there be light. (KJV)"),
            "[1] And God said, Let there be light."
        );
        assert_eq!(normalize("[1] Jesus wept. (NIV1984)  "), "[1] Jesus wept.");
    }

    #[test]
    fn keeps_mid_text_parentheticals() {
        assert_eq!(
            normalize("[1] Cephas (which is Peter) followed."),
            "[1] Cephas (which is Peter) followed."
        );
    }

    #[test]
    fn promotes_bare_leading_number_into_marker() {
        assert_eq!(
            normalize("1 In the beginning was the Word."),
            "[1] In the beginning was the Word."
        );
    }

    #[test]
    fn leaves_bracketed_leading_marker_alone() {
        assert_eq!(normalize("[1] In the beginning"), "[1] In the beginning");
    }

    #[test]
    fn empty_input_normalizes_to_empty() {
        assert_eq!(normalize("  \r\n "), "");
        assert_eq!(normalize("(ESV)"), "");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(collapse_whitespace("  a \n\n b\t c  "), "a b c");
    }
}
