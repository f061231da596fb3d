//! Budget resolution and top-k sentence selection.
//!
//! Selection ranks a copy of the sentence list by score descending with ties
//! broken by document position, takes the top `k`, and hands the kept subset
//! back in document order.

use super::document::Sentence;
use super::SummaryOptions;
use crate::errors::SummarizeError;

/// Reject out-of-range budgets before any scoring work happens.
pub(crate) fn validate_budget(options: &SummaryOptions) -> Result<(), SummarizeError> {
    if options.top_n == Some(0) {
        return Err(SummarizeError::InvalidBudget("top_n must be > 0".into()));
    }
    if !(options.percent > 0.0 && options.percent <= 1.0) {
        return Err(SummarizeError::InvalidBudget(format!(
            "percent must be in (0, 1], got {}",
            options.percent
        )));
    }
    Ok(())
}

/// Number of sentences to keep out of `total`. An absolute count overrides
/// the fraction; a fractional budget keeps at least one sentence of a
/// non-empty document. Assumes `validate_budget` passed.
pub(crate) fn resolve_count(options: &SummaryOptions, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    match options.top_n {
        Some(n) => n.min(total),
        None => {
            let k = (options.percent * total as f64).round() as usize;
            k.clamp(1, total)
        }
    }
}

/// Sentence indices ordered by score descending; equal scores keep document
/// order, so ranking is deterministic.
pub(crate) fn rank_indices(sentences: &[Sentence]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sentences.len()).collect();
    order.sort_by(|&a, &b| {
        sentences[b]
            .score
            .total_cmp(&sentences[a].score)
            .then(sentences[a].index.cmp(&sentences[b].index))
    });
    order
}

/// The top `k` of a ranking, restored to document order for assembly.
pub(crate) fn select_top(ranked: &[usize], k: usize) -> Vec<usize> {
    let mut kept = ranked[..k.min(ranked.len())].to_vec();
    kept.sort_unstable();
    kept
}
