//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] citescan_core::errors::ConfigError),

    #[error("corpus error: {0}")]
    Corpus(#[from] citescan_corpus::CorpusError),

    #[error("pipeline error: {0}")]
    Pipeline(#[from] citescan_corpus::PipelineError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
