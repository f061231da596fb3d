use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Parts of speech whose tokens count towards sentence content. Everything
/// else (determiners, adpositions, punctuation, ...) is noise for scoring.
pub static CONTENTFUL_POS_TAGS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["ADJ", "ADV", "NOUN", "PROPN", "VERB"]));

/// Entity types whose mentions count towards sentence content.
pub static CONTENTFUL_ENTITY_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "IDENTIFIER:DISTANCE",
        "IDENTIFIER:LATITUDE_LONGITUDE",
        "IDENTIFIER:MONEY",
        "LOCATION",
        "NATIONALITY",
        "ORGANIZATION",
        "PERSON",
        "PRODUCT",
        "RELIGION",
        "TEMPORAL:DATE",
        "TITLE",
    ])
});

/// A sentence boundary as a half-open character range over the document text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentenceSpan {
    #[serde(rename = "startOffset")]
    pub start: usize,
    #[serde(rename = "endOffset")]
    pub end: usize,
}

/// A word occurrence with its lemma. `contentful` is false for stopwords,
/// punctuation, and symbols.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSpan {
    #[serde(rename = "startOffset")]
    pub start: usize,
    #[serde(rename = "endOffset")]
    pub end: usize,
    pub lemma: String,
    pub contentful: bool,
}

/// A named-entity occurrence. Mentions of the same real-world entity share
/// the same `key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMention {
    #[serde(rename = "startOffset")]
    pub start: usize,
    #[serde(rename = "endOffset")]
    pub end: usize,
    pub key: String,
}

/// Complete annotation of one document, as produced by the annotation
/// service: the raw text plus flat span lists. All offsets are character
/// offsets into `data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    pub data: String,
    pub sentences: Vec<SentenceSpan>,
    pub tokens: Vec<TokenSpan>,
    pub mentions: Vec<EntityMention>,
}
