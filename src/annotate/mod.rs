use crate::errors::AnnotateError;

pub mod client;
pub mod model;

pub use client::HttpAnnotator;
pub use model::{Annotation, EntityMention, SentenceSpan, TokenSpan};

/// Source of linguistic annotations for a document: sentence boundaries,
/// lemmatized tokens, and named-entity mentions as character offset spans.
pub trait Annotator {
    /// Annotate `content`, or the document behind it when `uri` is set.
    fn annotate(&self, content: &str, uri: bool) -> Result<Annotation, AnnotateError>;
}
