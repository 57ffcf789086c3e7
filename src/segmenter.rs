//! Passage segmentation.
//!
//! Recovers verse boundaries and section headings from the flat string an
//! upstream text provider returns. Verse numbers arrive as inline
//! bracketed markers; headings are ordinary lines told apart from prose
//! only by shape. The builder makes a single pass over the marker list,
//! carving the text between consecutive markers into verses and threading
//! one pending heading from each boundary to the next.

use crate::config::SegmenterConfig;
use crate::error::PassageError;
use crate::heading::is_heading;
use crate::marker::{RE_VERSE_MARKER, scan_markers};
use crate::normalize::{collapse_whitespace, normalize_passage};
use crate::request::PassageRequest;
use crate::verse::Verse;
use tracing::debug;

/// The segmenter is a pure function over its input; the struct only exists
/// to hold tunables. Distinct calls share nothing and cannot interfere.
#[derive(Debug, Clone, Default)]
pub struct PassageSegmenter {
    config: SegmenterConfig,
}

impl PassageSegmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// Segment a raw passage into ordered verse records. An empty result is
    /// the only failure signal: the text carried no usable verse markers,
    /// or every content span reduced to nothing. This function itself never
    /// errors over malformed input.
    pub fn segment(&self, book: &str, chapter: u32, raw: &str) -> Vec<Verse> {
        let text = normalize_passage(raw, &self.config);
        if text.is_empty() {
            return Vec::new();
        }

        let markers = scan_markers(&text);
        if markers.is_empty() {
            debug!(book, chapter, "no verse markers in passage text");
            return Vec::new();
        }

        let mut verses = Vec::with_capacity(markers.len());

        // Anything before the first marker is a heading for the first
        // verse, not a verse of its own.
        let prefix = collapse_whitespace(&text[..markers[0].start]);
        let mut pending_heading = (!prefix.is_empty()).then_some(prefix);

        for (idx, marker) in markers.iter().enumerate() {
            let span_end = markers.get(idx + 1).map_or(text.len(), |next| next.start);
            let span = &text[marker.end..span_end];

            let mut lines: Vec<&str> = span
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();

            // A heading for the next verse bleeds into the tail of this
            // span. Peel heading-shaped lines off back to front, keeping
            // at least one line of body text.
            let mut trailing_headings: Vec<&str> = Vec::new();
            while lines.len() > 1 {
                let last = lines[lines.len() - 1];
                if !is_heading(last, self.config.heading_max_chars) {
                    break;
                }
                trailing_headings.insert(0, last);
                lines.pop();
            }

            let mut body = strip_marker_artifacts(&lines.join(" "));
            if body.is_empty() && !trailing_headings.is_empty() {
                // The span's remaining content was all heading-shaped;
                // reclaim it as the verse text instead of losing the verse.
                body = strip_marker_artifacts(&trailing_headings.join(" "));
                trailing_headings.clear();
            }
            if body.is_empty() {
                // Deliberate silent loss: an empty verse is dropped, never
                // emitted. The incoming pending heading stays pending; the
                // buffer dies with the span that produced it.
                debug!(verse = marker.number, "dropping marker with empty content span");
                continue;
            }

            verses.push(Verse::new(
                book,
                chapter,
                marker.number,
                body,
                pending_heading.take(),
            ));
            pending_heading = if trailing_headings.is_empty() {
                None
            } else {
                Some(collapse_whitespace(&trailing_headings.join(" ")))
            };
        }

        debug!(
            book,
            chapter,
            markers = markers.len(),
            verses = verses.len(),
            "segmented passage"
        );
        verses
    }

    /// Segment a validated request, reporting zero verses as a typed error
    /// so callers can tell "provider text did not parse" apart from
    /// transport failures.
    pub fn segment_passage(
        &self,
        request: &PassageRequest,
        raw: &str,
    ) -> Result<Vec<Verse>, PassageError> {
        let verses = self.segment(request.book(), request.chapter(), raw);
        if verses.is_empty() {
            return Err(PassageError::EmptyPassage {
                book: request.book().to_string(),
                chapter: request.chapter(),
            });
        }
        Ok(verses)
    }
}

/// Join leftover lines into a verse body: stray bracket markers removed,
/// whitespace collapsed.
fn strip_marker_artifacts(text: &str) -> String {
    collapse_whitespace(&RE_VERSE_MARKER.replace_all(text, " "))
}
