//! Corpus and pipeline errors.

/// Errors from corpus retrieval.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a structured error payload.
    #[error("corpus API error: {message}")]
    Api { message: String },

    #[error("document not found: {title}")]
    NotFound { title: String },

    #[error("no content available for {title}")]
    MissingContent { title: String },

    #[error("unexpected response shape: {context}")]
    InvalidResponse { context: &'static str },
}

/// Errors from the end-to-end estimation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Estimate(#[from] citescan_core::errors::EstimateError),

    #[error("failed to compile the tag catalog: {0}")]
    Catalog(#[from] regex::Error),
}
