//! Document-wide content weights.
//!
//! A term's weight is simply how often it occurs across the whole document,
//! so a word's global frequency drives its contribution to every sentence it
//! appears in. Lemmas and entity keys are counted in separate tables since
//! they live in different key spaces.

use crate::annotate::Annotation;
use std::collections::HashMap;

/// Frequency table over contentful lemmas and entity keys. Built in one pass
/// per document and read-only afterwards. Flat counts only: no IDF, no case
/// folding beyond what the annotation service already applied.
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    lemmas: HashMap<String, f64>,
    entities: HashMap<String, f64>,
}

impl WeightTable {
    pub fn build(annotation: &Annotation) -> Self {
        let mut table = Self::default();
        for token in &annotation.tokens {
            if token.contentful {
                *table.lemmas.entry(token.lemma.clone()).or_insert(0.0) += 1.0;
            }
        }
        for mention in &annotation.mentions {
            *table.entities.entry(mention.key.clone()).or_insert(0.0) += 1.0;
        }
        table
    }

    /// Weight of a lemma; zero for anything never counted.
    pub fn lemma_weight(&self, lemma: &str) -> f64 {
        self.lemmas.get(lemma).copied().unwrap_or(0.0)
    }

    /// Weight of an entity key; zero for anything never counted.
    pub fn entity_weight(&self, key: &str) -> f64 {
        self.entities.get(key).copied().unwrap_or(0.0)
    }
}
