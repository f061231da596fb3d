use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("http error: {0}")]
    Http(String),
    #[error("decode error: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("invalid budget: {0}")]
    InvalidBudget(String),
    #[error("malformed annotation: {0}")]
    MalformedAnnotation(String),
}
