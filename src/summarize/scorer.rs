//! Sentence scoring.
//!
//! A sentence's score is the sum of its contentful lemma weights and entity
//! mention weights, normalized by token count, then multiplied by a
//! positional factor `ln(N - i + POSITION_DECAY_OFFSET)` for sentence `i` of
//! `N`. Earlier sentences get the larger factor, but the falloff is
//! logarithmic so a late sentence with very high content can still win.
//!
//! A token inside an entity mention contributes through both the lemma term
//! and the entity term. That double counting is deliberate: entity mentions
//! are an additional signal on top of plain word frequency.

use super::document::Document;
use super::weights::WeightTable;

/// Additive offset inside the positional decay logarithm. With an offset of
/// one the factor stays at or above `ln(2)` for every valid position, so no
/// sentence is zeroed out by position alone. Raising it flattens the curve.
pub const POSITION_DECAY_OFFSET: f64 = 1.0;

/// Positional multiplier for sentence `index` of `total`. Monotonically
/// non-increasing in `index` and strictly positive for `index < total`.
pub(crate) fn position_decay(index: usize, total: usize) -> f64 {
    ((total - index) as f64 + POSITION_DECAY_OFFSET).ln()
}

/// Assign every sentence its score. Pure and deterministic: rescoring the
/// same document produces identical values. Zero-token sentences score zero
/// without ever dividing.
pub fn score_sentences(document: &mut Document, weights: &WeightTable) {
    let total = document.sentences.len();
    for sentence in document.sentences.iter_mut() {
        let raw: f64 = sentence
            .lemmas
            .iter()
            .map(|lemma| weights.lemma_weight(lemma))
            .sum::<f64>()
            + sentence
                .entity_keys
                .iter()
                .map(|key| weights.entity_weight(key))
                .sum::<f64>();
        let length_normalized = if sentence.token_length > 0 {
            raw / sentence.token_length as f64
        } else {
            0.0
        };
        sentence.score = length_normalized * position_decay(sentence.index, total);
    }
}
