use crate::annotate::{Annotation, EntityMention, TokenSpan};
use crate::errors::SummarizeError;

/// One sentence of the document, in canonical document order.
///
/// `token_length` counts every word token inside the span, contentful or not;
/// it only exists for length normalization. `score` starts at zero and is
/// written exactly once by the scorer.
#[derive(Debug, Clone)]
pub struct Sentence {
    pub start: usize,
    pub end: usize,
    pub index: usize,
    pub text: String,
    pub token_length: usize,
    pub score: f64,
    /// Lemmas of the contentful tokens inside this sentence.
    pub(crate) lemmas: Vec<String>,
    /// Keys of the entity mentions inside this sentence.
    pub(crate) entity_keys: Vec<String>,
}

/// A document assembled from one annotation payload: the ordered sentence
/// list with each sentence's tokens and entity mentions resolved to it.
#[derive(Debug, Clone)]
pub struct Document {
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Build a document from an annotation, validating the span invariants:
    /// sentence spans are ascending and non-overlapping (gaps are fine), and
    /// every token and mention lies inside exactly one sentence. Violations
    /// are hard errors since repairing them would corrupt scoring.
    pub fn build(annotation: &Annotation) -> Result<Self, SummarizeError> {
        let slicer = CharSlicer::new(&annotation.data);

        let mut prev_end = 0usize;
        for span in &annotation.sentences {
            if span.start > span.end || span.start < prev_end {
                return Err(SummarizeError::MalformedAnnotation(format!(
                    "sentence span [{}, {}) overlaps or is out of order",
                    span.start, span.end
                )));
            }
            prev_end = span.end;
        }

        let mut tokens: Vec<&TokenSpan> = annotation.tokens.iter().collect();
        tokens.sort_by_key(|t| (t.start, t.end));
        let mut mentions: Vec<&EntityMention> = annotation.mentions.iter().collect();
        mentions.sort_by_key(|m| (m.start, m.end));

        let mut sentences = Vec::with_capacity(annotation.sentences.len());
        let mut ti = 0;
        let mut mi = 0;
        for (index, span) in annotation.sentences.iter().enumerate() {
            let mut token_length = 0;
            let mut lemmas = Vec::new();
            while ti < tokens.len() && tokens[ti].start < span.end {
                let token = tokens[ti];
                if token.start < span.start || token.end > span.end {
                    return Err(straddle("token", token.start, token.end, span.start, span.end));
                }
                token_length += 1;
                if token.contentful {
                    lemmas.push(token.lemma.clone());
                }
                ti += 1;
            }

            let mut entity_keys = Vec::new();
            while mi < mentions.len() && mentions[mi].start < span.end {
                let mention = mentions[mi];
                if mention.start < span.start || mention.end > span.end {
                    return Err(straddle(
                        "entity mention",
                        mention.start,
                        mention.end,
                        span.start,
                        span.end,
                    ));
                }
                entity_keys.push(mention.key.clone());
                mi += 1;
            }

            sentences.push(Sentence {
                start: span.start,
                end: span.end,
                index,
                text: slicer.slice(span.start, span.end)?.to_string(),
                token_length,
                score: 0.0,
                lemmas,
                entity_keys,
            });
        }

        if ti < tokens.len() {
            return Err(outside("token", tokens[ti].start, tokens[ti].end));
        }
        if mi < mentions.len() {
            return Err(outside("entity mention", mentions[mi].start, mentions[mi].end));
        }

        Ok(Self { sentences })
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

fn straddle(kind: &str, start: usize, end: usize, s_start: usize, s_end: usize) -> SummarizeError {
    SummarizeError::MalformedAnnotation(format!(
        "{kind} span [{start}, {end}) not contained in sentence span [{s_start}, {s_end})"
    ))
}

fn outside(kind: &str, start: usize, end: usize) -> SummarizeError {
    SummarizeError::MalformedAnnotation(format!(
        "{kind} span [{start}, {end}) lies outside every sentence span"
    ))
}

/// Recovers text by character offsets. Annotations count characters, Rust
/// strings index bytes, so the byte position of each character is computed
/// once up front.
struct CharSlicer<'a> {
    data: &'a str,
    byte_starts: Vec<usize>,
}

impl<'a> CharSlicer<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            data,
            byte_starts: data.char_indices().map(|(b, _)| b).collect(),
        }
    }

    fn slice(&self, start: usize, end: usize) -> Result<&'a str, SummarizeError> {
        let byte_at = |offset: usize| -> Option<usize> {
            if offset == self.byte_starts.len() {
                Some(self.data.len())
            } else {
                self.byte_starts.get(offset).copied()
            }
        };
        match (byte_at(start), byte_at(end)) {
            (Some(b0), Some(b1)) if b0 <= b1 => Ok(&self.data[b0..b1]),
            _ => Err(SummarizeError::MalformedAnnotation(format!(
                "span [{start}, {end}) exceeds document length {}",
                self.byte_starts.len()
            ))),
        }
    }
}
