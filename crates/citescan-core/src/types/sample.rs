//! Sample types: document identity and per-document observations.

use serde::{Deserialize, Serialize};

/// Identity of one document in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Corpus-assigned page id.
    pub id: u64,
    /// Document title, unique within the corpus.
    pub title: String,
}

impl DocumentRef {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// One sampled document's recognizer output. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleObservation {
    /// Title of the sampled document.
    pub title: String,
    /// Number of citation-flag tags the recognizer found.
    pub tag_count: u64,
}

impl SampleObservation {
    pub fn new(title: impl Into<String>, tag_count: u64) -> Self {
        Self {
            title: title.into(),
            tag_count,
        }
    }
}
