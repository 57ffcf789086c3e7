//! Output data model for segmented passages.

use serde::{Deserialize, Serialize};

/// One verse as the reading interface renders it: the number from its
/// marker, the derived reference string, the cleaned body text, and the
/// section heading that precedes it, if any.
///
/// Verses carry no identity beyond a single request; they are built fresh
/// per call and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    #[serde(rename = "verseNumber")]
    pub number: u32,
    pub reference: String,
    pub text: String,
    pub heading: Option<String>,
}

impl Verse {
    /// Build a verse record, deriving the reference from its coordinates.
    /// The reference is always `"<book> <chapter>:<number>"`; it is never
    /// stored independently of the parts it is computed from.
    pub fn new(
        book: &str,
        chapter: u32,
        number: u32,
        text: String,
        heading: Option<String>,
    ) -> Self {
        Self {
            number,
            reference: format!("{book} {chapter}:{number}"),
            text,
            heading,
        }
    }
}

/// Serialization envelope for one segmented chapter. `reference` and
/// `attribution` come from the caller's provider metadata and pass through
/// unchanged; only `verses` is computed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub reference: String,
    pub attribution: Option<String>,
    pub verses: Vec<Verse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_reference_from_coordinates() {
        let verse = Verse::new("Genesis", 1, 3, "And God said".to_string(), None);
        assert_eq!(verse.reference, "Genesis 1:3");
    }

    #[test]
    fn serializes_with_interface_field_names() {
        let verse = Verse::new("John", 3, 16, "For God so loved".to_string(), None);
        let json = serde_json::to_value(&verse).expect("verse should serialize");
        assert_eq!(json["verseNumber"], 16);
        assert_eq!(json["reference"], "John 3:16");
        assert!(json["heading"].is_null());
    }
}
