//! Passage segmentation for scripture reading interfaces.
//!
//! An upstream text provider returns a chapter as one flat string: verse
//! numbers appear as inline bracketed markers and section headings as
//! ordinary lines mixed into the prose, with no formal grammar to lean on.
//! This crate recovers that structure, producing ordered per-verse records
//! with derived references and attached headings. Fetching the text,
//! authenticating against the provider, and persisting results are the
//! caller's business; nothing here touches the network or disk besides
//! optional config loading.

pub mod config;
pub mod error;
pub mod heading;
pub mod marker;
pub mod normalize;
pub mod request;
pub mod segmenter;
pub mod verse;

pub use config::{LogLevel, SegmenterConfig, load_config};
pub use error::PassageError;
pub use request::PassageRequest;
pub use segmenter::PassageSegmenter;
pub use verse::{Passage, Verse};
