//! Failure kinds at the segmentation boundary.
//!
//! The segmenter itself never fails over malformed text. These variants
//! exist so callers can keep "the request was bad" and "the provider's text
//! would not segment" apart from transport failures when reporting to
//! users: a provider outage and a provider format change look very
//! different to an operator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassageError {
    /// Book name failed validation before any text was fetched.
    #[error("invalid book name {0:?}")]
    InvalidBook(String),

    /// Chapter number outside the range providers serve.
    #[error("chapter {0} outside the supported range 1..=200")]
    InvalidChapter(u32),

    /// The segmenter ran and produced zero verses. Retrying the same text
    /// cannot change the outcome, so this is terminal for the request.
    #[error("no verses found in passage text for {book} {chapter}")]
    EmptyPassage { book: String, chapter: u32 },
}
