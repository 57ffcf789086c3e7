//! Section heading detection.
//!
//! Headings in provider text are ordinary lines interleaved with verse
//! prose; nothing but their shape distinguishes them. The predicate here is
//! deliberately simple and is known to misread a short, unpunctuated,
//! capitalized line of prose as a heading. That ambiguity is inherent to
//! the input format; callers compensate downstream rather than this check
//! growing cleverer and less predictable.

use once_cell::sync::Lazy;
use regex::Regex;

/// Prose sentences end in punctuation; headings do not.
const TERMINAL_PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Title-shaped line: opens with an uppercase letter or digit, then only
/// letters, digits, apostrophes, quotes, commas, hyphens, parentheses, and
/// spaces.
static RE_HEADING_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[\p{Lu}0-9][\p{L}0-9'’‘“”",() -]*$"#).unwrap());

/// Decide whether one trimmed, non-empty line reads as a section heading
/// rather than verse prose.
pub fn is_heading(line: &str, max_chars: usize) -> bool {
    if line.chars().count() > max_chars {
        return false;
    }
    if line.ends_with(&TERMINAL_PUNCTUATION[..]) {
        return false;
    }
    RE_HEADING_SHAPE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 120;

    #[test]
    fn accepts_title_shaped_lines() {
        assert!(is_heading("The Creation", MAX));
        assert!(is_heading("Section Two", MAX));
        assert!(is_heading("David's Prayer (Continued)", MAX));
        assert!(is_heading("1 John", MAX));
    }

    #[test]
    fn rejects_lines_ending_in_sentence_punctuation() {
        assert!(!is_heading("And God saw that it was good.", MAX));
        assert!(!is_heading("Hear, O Israel:", MAX));
        assert!(!is_heading("Why do the nations rage?", MAX));
    }

    #[test]
    fn rejects_lowercase_openers() {
        assert!(!is_heading("and the earth was without form", MAX));
    }

    #[test]
    fn rejects_disallowed_characters() {
        assert!(!is_heading("Selah [pause]", MAX));
        assert!(!is_heading("Moses & Aaron", MAX));
    }

    #[test]
    fn rejects_lines_over_the_length_bound() {
        let long = "A".repeat(121);
        assert!(!is_heading(&long, MAX));
        let exact = "A".repeat(120);
        assert!(is_heading(&exact, MAX));
    }
}
