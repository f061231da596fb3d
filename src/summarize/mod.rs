//! Extractive summarization core.
//!
//! Pure and synchronous: one [`Annotation`] in, one [`Summary`] out. Content
//! weighting, sentence scoring, and selection live in the submodules; this
//! module validates the budget, drives them in order, and assembles the
//! output.

use crate::annotate::Annotation;
use crate::errors::SummarizeError;
use serde::Serialize;

pub mod document;
pub mod scorer;
pub mod selector;
pub mod weights;

pub use document::{Document, Sentence};
pub use scorer::POSITION_DECAY_OFFSET;
pub use weights::WeightTable;

/// Fraction of sentences kept when the caller does not say otherwise.
pub const DEFAULT_PERCENT: f64 = 0.15;

/// Size budget for the summary: a fraction of the sentence count, or an
/// absolute sentence count that overrides the fraction when present.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    pub percent: f64,
    pub top_n: Option<usize>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            percent: DEFAULT_PERCENT,
            top_n: None,
        }
    }
}

/// One scored sentence in the diagnostic ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankedSentence {
    #[serde(rename = "startOffset")]
    pub start: usize,
    #[serde(rename = "endOffset")]
    pub end: usize,
    pub text: String,
    pub score: f64,
    #[serde(rename = "tokenLength")]
    pub token_length: usize,
}

/// Summarization result: the kept text, the full ranking for diagnostic
/// consumers, and a human-readable info line.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub info: String,
    pub ranked: Vec<RankedSentence>,
    pub summary: String,
}

/// Summarize one annotated document.
///
/// The budget is validated before anything else runs. Sentences are scored
/// against document-global content weights, ranked, cut to the budget, and
/// re-joined in document order with each sentence's trailing line breaks
/// stripped. The ranking always covers all sentences, kept or not.
pub fn summarize(
    annotation: &Annotation,
    options: &SummaryOptions,
) -> Result<Summary, SummarizeError> {
    selector::validate_budget(options)?;

    let mut document = Document::build(annotation)?;
    let weights = WeightTable::build(annotation);
    scorer::score_sentences(&mut document, &weights);

    let total = document.len();
    let kept_count = selector::resolve_count(options, total);
    let ranking = selector::rank_indices(&document.sentences);
    let kept = selector::select_top(&ranking, kept_count);

    let summary = kept
        .iter()
        .map(|&i| document.sentences[i].text.trim_end_matches(['\r', '\n']))
        .collect::<Vec<_>>()
        .join("\n");

    let percent_kept = if total == 0 {
        0
    } else {
        (100.0 * kept_count as f64 / total as f64).round() as u32
    };
    let info = format!("maintained {kept_count} sentences ({percent_kept}% of original sentences)");

    let ranked = ranking
        .iter()
        .map(|&i| {
            let s = &document.sentences[i];
            RankedSentence {
                start: s.start,
                end: s.end,
                text: s.text.clone(),
                score: s.score,
                token_length: s.token_length,
            }
        })
        .collect();

    Ok(Summary {
        info,
        ranked,
        summary,
    })
}
