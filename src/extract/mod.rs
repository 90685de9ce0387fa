//! Definition extraction
//!
//! Turns a parsed dictionary page into four display fields. Meaning and usage
//! come from anchored elements in the tree; synonyms and antonyms are then
//! scanned out of the meaning text by their labels. Every miss degrades to a
//! fixed sentinel string, so the result never has an absent field.

mod markers;

use serde::{Deserialize, Serialize};

use crate::page::{Document, Element};

pub use markers::scan_marker;

pub const NO_MEANING: &str = "No meaning found.";
pub const NO_USAGE: &str = "No usage examples found.";
pub const NO_SYNONYMS: &str = "No synonyms found.";
pub const NO_ANTONYMS: &str = "No antonyms found.";

/// Prefix applied to the whole meaning string, sentinel included
pub const MEANING_PREFIX: &str = "-";
pub const MEANING_SEPARATOR: &str = "\n -";
pub const USAGE_SEPARATOR: &str = "\n-";

pub const SYNONYMS_MARKER: &str = "Synonyms:";
pub const ANTONYMS_MARKER: &str = "Antonyms:";

/// An element located by tag name and `data-type` attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub tag: &'static str,
    pub data_type: &'static str,
}

impl Anchor {
    pub fn matches(&self, element: &Element) -> bool {
        element.is(self.tag) && element.attr("data-type") == Some(self.data_type)
    }
}

pub const DEFINITION_LIST: Anchor = Anchor {
    tag: "ol",
    data_type: "definition-content-list",
};

pub const EXAMPLE_SENTENCES: Anchor = Anchor {
    tag: "section",
    data_type: "example-sentences-module",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub meaning: String,
    pub usage: String,
    pub synonyms: String,
    pub antonyms: String,
}

impl ExtractionResult {
    /// True when every field fell back to its sentinel
    pub fn is_empty(&self) -> bool {
        self.meaning == format!("{MEANING_PREFIX}{NO_MEANING}")
            && self.usage == NO_USAGE
            && self.synonyms == NO_SYNONYMS
            && self.antonyms == NO_ANTONYMS
    }
}

pub fn extract(document: &Document) -> ExtractionResult {
    let meaning = extract_meaning(document);
    let usage = extract_usage(document);
    let synonyms = synonyms_from(&meaning);
    let antonyms = antonyms_from(&meaning);

    ExtractionResult {
        meaning,
        usage,
        synonyms,
        antonyms,
    }
}

/// Definition list items joined with `"\n -"`, the whole string prefixed by `"-"`
pub fn extract_meaning(document: &Document) -> String {
    let body = document
        .find_first(|e| DEFINITION_LIST.matches(e))
        .map(|list| {
            list.descendants_matching(|e| e.is("li"))
                .map(Element::text)
                .collect::<Vec<_>>()
        })
        .filter(|items| !items.is_empty())
        .map(|items| items.join(MEANING_SEPARATOR))
        .unwrap_or_else(|| NO_MEANING.to_string());

    format!("{MEANING_PREFIX}{body}")
}

/// First paragraph inside each example `div`, joined with `"\n-"`
pub fn extract_usage(document: &Document) -> String {
    let Some(section) = document.find_first(|e| EXAMPLE_SENTENCES.matches(e)) else {
        return NO_USAGE.to_string();
    };

    let examples: Vec<String> = section
        .children_matching(|e| e.is("div"))
        .filter_map(|div| div.find_first(|e| e.is("p")))
        .map(Element::text)
        .collect();

    if examples.is_empty() {
        NO_USAGE.to_string()
    } else {
        examples.join(USAGE_SEPARATOR)
    }
}

pub fn synonyms_from(meaning: &str) -> String {
    scan_marker(meaning, SYNONYMS_MARKER, Some(ANTONYMS_MARKER))
        .unwrap_or(NO_SYNONYMS)
        .to_string()
}

pub fn antonyms_from(meaning: &str) -> String {
    scan_marker(meaning, ANTONYMS_MARKER, Some("\n"))
        .unwrap_or(NO_ANTONYMS)
        .to_string()
}
