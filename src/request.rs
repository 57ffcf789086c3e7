//! Request parameter validation.
//!
//! Book and chapter are vetted before any passage text is fetched or
//! segmented, so the segmenter only ever sees well-formed identifiers and
//! a bad request is never mistaken for unparseable provider text.

use crate::error::PassageError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Lowest chapter number a provider will serve.
pub const MIN_CHAPTER: u32 = 1;
/// Highest chapter number a provider will serve.
pub const MAX_CHAPTER: u32 = 200;

/// Book names are plain words: letters, digits, spaces, apostrophes,
/// hyphens. Covers "Song of Solomon", "1 Corinthians", and the odd
/// apostrophe without letting request text smuggle in anything else.
static RE_BOOK_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9' -]+$").unwrap());

/// A validated (book, chapter) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageRequest {
    book: String,
    chapter: u32,
}

impl PassageRequest {
    /// Validate raw parameters into a request the segmenter will accept.
    pub fn new(book: &str, chapter: u32) -> Result<Self, PassageError> {
        let book = book.trim();
        if book.is_empty() || !RE_BOOK_NAME.is_match(book) {
            return Err(PassageError::InvalidBook(book.to_string()));
        }
        if !(MIN_CHAPTER..=MAX_CHAPTER).contains(&chapter) {
            return Err(PassageError::InvalidChapter(chapter));
        }
        Ok(Self {
            book: book.to_string(),
            chapter,
        })
    }

    pub fn book(&self) -> &str {
        &self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    /// Canonical reference for the whole request, e.g. `"John 3"`.
    pub fn reference(&self) -> String {
        format!("{} {}", self.book, self.chapter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_book_names() {
        assert!(PassageRequest::new("Genesis", 1).is_ok());
        assert!(PassageRequest::new("1 Corinthians", 13).is_ok());
        assert!(PassageRequest::new("Song of Solomon", 2).is_ok());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let request = PassageRequest::new("  John  ", 3).expect("trimmed name should validate");
        assert_eq!(request.book(), "John");
        assert_eq!(request.reference(), "John 3");
    }

    #[test]
    fn rejects_books_with_stray_characters() {
        assert_eq!(
            PassageRequest::new("Ps@lms", 1),
            Err(PassageError::InvalidBook("Ps@lms".to_string()))
        );
        assert_eq!(
            PassageRequest::new("", 1),
            Err(PassageError::InvalidBook(String::new()))
        );
    }

    #[test]
    fn rejects_chapters_outside_range() {
        assert_eq!(
            PassageRequest::new("Psalms", 0),
            Err(PassageError::InvalidChapter(0))
        );
        assert_eq!(
            PassageRequest::new("Psalms", 201),
            Err(PassageError::InvalidChapter(201))
        );
        assert!(PassageRequest::new("Psalms", 200).is_ok());
    }
}
