//! Static quiz content: questions, sign pools, and text blocks.
//!
//! The content document is JSON with camelCase field names:
//!
//! ```json
//! {
//!   "questions": [
//!     { "id": 1, "text": "Pick a season", "options": [
//!       { "label": "Spring", "value": "spring", "horoscopeFragment": "You bloom late." }
//!     ] }
//!   ],
//!   "zodiacs": [{ "name": "Aries", "horoscopeFragment": "Mars pushes you." }],
//!   "ascendants": [{ "name": "Libra", "horoscopeFragment": "Venus softens it." }],
//!   "startBlocks": ["The stars have spoken."],
//!   "endBlocks": ["Trust the orbit."]
//! }
//! ```
//!
//! Only basic shape is checked by deserialization; there is no schema
//! versioning and no semantic validation.

use serde::{Deserialize, Serialize};

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    /// Display text.
    pub label: String,
    /// Identifier of the option.
    pub value: String,
    /// Text contributed to the horoscope when this option is chosen.
    pub horoscope_fragment: String,
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question identifier.
    pub id: i64,
    /// Question text.
    pub text: String,
    /// Options in display order.
    pub options: Vec<AnswerOption>,
}

/// A zodiac or ascendant entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sign {
    /// Sign name, e.g. "Aries".
    pub name: String,
    /// Text contributed to the horoscope when this sign is drawn.
    pub horoscope_fragment: String,
}

/// The raw content document as fetched from a [`crate::ContentSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    /// All questions in quiz order.
    pub questions: Vec<Question>,
    /// Zodiac pool.
    #[serde(default)]
    pub zodiacs: Vec<Sign>,
    /// Ascendant pool.
    #[serde(default)]
    pub ascendants: Vec<Sign>,
    /// Opening text blocks. Absent is treated as empty.
    #[serde(default)]
    pub start_blocks: Vec<String>,
    /// Closing text blocks. Absent is treated as empty.
    #[serde(default)]
    pub end_blocks: Vec<String>,
}

impl ContentDocument {
    /// Parse a content document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Loaded quiz content. Immutable between loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    questions: Vec<Question>,
    zodiacs: Vec<Sign>,
    ascendants: Vec<Sign>,
    start_blocks: Vec<String>,
    end_blocks: Vec<String>,
}

/// Pool sizes of a content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSummary {
    /// Number of questions.
    pub questions: usize,
    /// Total number of options across all questions.
    pub options: usize,
    /// Number of zodiac entries.
    pub zodiacs: usize,
    /// Number of ascendant entries.
    pub ascendants: usize,
    /// Number of start blocks.
    pub start_blocks: usize,
    /// Number of end blocks.
    pub end_blocks: usize,
}

impl ContentSummary {
    /// Whether the composer will take the plain-answers fallback path.
    pub fn uses_fallback(&self) -> bool {
        self.start_blocks == 0 || self.end_blocks == 0
    }
}

impl From<ContentDocument> for ContentStore {
    fn from(doc: ContentDocument) -> Self {
        Self {
            questions: doc.questions,
            zodiacs: doc.zodiacs,
            ascendants: doc.ascendants,
            start_blocks: doc.start_blocks,
            end_blocks: doc.end_blocks,
        }
    }
}

impl ContentStore {
    /// Create an empty store (nothing loaded yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// All questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Zodiac pool.
    pub fn zodiacs(&self) -> &[Sign] {
        &self.zodiacs
    }

    /// Ascendant pool.
    pub fn ascendants(&self) -> &[Sign] {
        &self.ascendants
    }

    /// Opening text blocks.
    pub fn start_blocks(&self) -> &[String] {
        &self.start_blocks
    }

    /// Closing text blocks.
    pub fn end_blocks(&self) -> &[String] {
        &self.end_blocks
    }

    /// Question at `index`, if any.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Whether there are no questions to ask.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Pool sizes.
    pub fn summary(&self) -> ContentSummary {
        ContentSummary {
            questions: self.questions.len(),
            options: self.questions.iter().map(|q| q.options.len()).sum(),
            zodiacs: self.zodiacs.len(),
            ascendants: self.ascendants.len(),
            start_blocks: self.start_blocks.len(),
            end_blocks: self.end_blocks.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "questions": [
            { "id": 1, "text": "Tea or coffee?", "options": [
                { "label": "Tea", "value": "tea", "horoscopeFragment": "You steep slowly." },
                { "label": "Coffee", "value": "coffee", "horoscopeFragment": "You rush ahead." }
            ] }
        ],
        "zodiacs": [{ "name": "Aries", "horoscopeFragment": "Mars pushes." }],
        "ascendants": [{ "name": "Libra", "horoscopeFragment": "Venus balances." }]
    }"#;

    #[test]
    fn parses_camel_case_fields() {
        let doc = ContentDocument::from_json(MINIMAL).unwrap();
        assert_eq!(doc.questions.len(), 1);
        assert_eq!(
            doc.questions[0].options[1].horoscope_fragment,
            "You rush ahead."
        );
        assert_eq!(doc.zodiacs[0].name, "Aries");
        assert_eq!(doc.ascendants[0].horoscope_fragment, "Venus balances.");
    }

    #[test]
    fn missing_blocks_default_to_empty() {
        let doc = ContentDocument::from_json(MINIMAL).unwrap();
        assert!(doc.start_blocks.is_empty());
        assert!(doc.end_blocks.is_empty());
    }

    #[test]
    fn missing_questions_is_a_parse_error() {
        assert!(ContentDocument::from_json(r#"{ "zodiacs": [] }"#).is_err());
    }

    #[test]
    fn store_summary_counts_pools() {
        let store = ContentStore::from(ContentDocument::from_json(MINIMAL).unwrap());
        let summary = store.summary();
        assert_eq!(summary.questions, 1);
        assert_eq!(summary.options, 2);
        assert_eq!(summary.zodiacs, 1);
        assert_eq!(summary.ascendants, 1);
        assert!(summary.uses_fallback());
    }

    #[test]
    fn empty_store() {
        let store = ContentStore::new();
        assert!(store.is_empty());
        assert!(store.question(0).is_none());
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let doc = ContentDocument::from_json(MINIMAL).unwrap();
        let json = doc.to_json_pretty().unwrap();
        assert!(json.contains("\"horoscopeFragment\""));
        assert!(json.contains("\"startBlocks\""));
    }
}
