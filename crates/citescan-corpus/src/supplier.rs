//! Document supplier abstraction.
//!
//! The estimation core needs exactly two things from a corpus: a way to
//! select sample documents and a way to read their raw text, plus a known
//! or estimated population size. Implementations report per-document
//! failures; the pipeline skips those documents rather than aborting.

use citescan_core::types::DocumentRef;

use crate::error::CorpusError;

/// Source of sampled documents and their raw markup text.
#[allow(async_fn_in_trait)]
pub trait DocumentSupplier: Send + Sync {
    /// Known or estimated size of the document population.
    async fn population_size(&self) -> Result<u64, CorpusError>;

    /// Select up to `desired` distinct documents for the sample.
    async fn list_sample_documents(
        &self,
        desired: usize,
    ) -> Result<Vec<DocumentRef>, CorpusError>;

    /// Fetch the raw markup text of one document.
    async fn document_text(&self, doc: &DocumentRef) -> Result<String, CorpusError>;
}

/// In-memory supplier over a fixed document set.
///
/// Documents registered with `None` text report `MissingContent`, which
/// lets tests exercise the pipeline's skip path.
pub struct StaticSupplier {
    documents: Vec<(DocumentRef, Option<String>)>,
    population: u64,
}

impl StaticSupplier {
    pub fn new(documents: Vec<(DocumentRef, Option<String>)>) -> Self {
        let population = documents.len() as u64;
        Self {
            documents,
            population,
        }
    }

    /// Override the reported population size.
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }
}

impl DocumentSupplier for StaticSupplier {
    async fn population_size(&self) -> Result<u64, CorpusError> {
        Ok(self.population)
    }

    async fn list_sample_documents(
        &self,
        desired: usize,
    ) -> Result<Vec<DocumentRef>, CorpusError> {
        Ok(self
            .documents
            .iter()
            .take(desired)
            .map(|(doc, _)| doc.clone())
            .collect())
    }

    async fn document_text(&self, doc: &DocumentRef) -> Result<String, CorpusError> {
        match self.documents.iter().find(|(d, _)| d == doc) {
            Some((_, Some(text))) => Ok(text.clone()),
            Some((_, None)) => Err(CorpusError::MissingContent {
                title: doc.title.clone(),
            }),
            None => Err(CorpusError::NotFound {
                title: doc.title.clone(),
            }),
        }
    }
}
