//! End-to-end estimation: sample → recognize → estimate.

use std::time::Duration;

use tracing::{debug, info, warn};

use citescan_analysis::{SampleEstimator, TagRecognizer};
use citescan_core::config::CitescanConfig;
use citescan_core::types::{EstimationResult, SampleObservation};

use crate::error::PipelineError;
use crate::supplier::DocumentSupplier;

/// Orchestrates one estimation run against a document supplier.
///
/// Control flow: resolve the population size, collect sample documents,
/// fetch and scan each one, then feed the observed counts to the
/// estimator. Per-document failures are logged and excluded from the
/// sample.
pub struct EstimationPipeline<S> {
    supplier: S,
    recognizer: TagRecognizer,
    estimator: SampleEstimator,
    pacing: Duration,
    population_override: Option<u64>,
}

impl<S: DocumentSupplier> EstimationPipeline<S> {
    pub fn new(supplier: S, config: &CitescanConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            supplier,
            recognizer: TagRecognizer::new()?,
            estimator: SampleEstimator::with_source(config.sampling.critical_value_source),
            pacing: Duration::from_millis(config.corpus.effective_pacing_ms()),
            population_override: config.sampling.population_override,
        })
    }

    /// Run one estimation over a sample of `sample_size` documents.
    pub async fn run(&self, sample_size: usize) -> Result<EstimationResult, PipelineError> {
        let population = match self.population_override {
            Some(size) => size,
            None => self.supplier.population_size().await?,
        };
        info!(population, sample_size, "starting estimation run");

        let documents = self.supplier.list_sample_documents(sample_size).await?;
        info!(retrieved = documents.len(), "collected sample documents");

        let mut observations = Vec::with_capacity(documents.len());
        let mut skipped = 0usize;

        for doc in &documents {
            match self.supplier.document_text(doc).await {
                Ok(text) => {
                    let count = self.recognizer.count_tags(&text) as u64;
                    debug!(title = %doc.title, count, "scanned document");
                    observations.push(SampleObservation::new(doc.title.clone(), count));
                }
                Err(error) => {
                    skipped += 1;
                    warn!(title = %doc.title, %error, "skipping document");
                }
            }
            if !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }
        }

        if skipped > 0 {
            info!(skipped, "documents excluded from the sample");
        }

        let result = self.estimator.estimate(&observations, population)?;
        info!(
            estimated_total = result.estimated_total,
            lower = result.confidence_interval.lower,
            upper = result.confidence_interval.upper,
            "estimation complete"
        );
        Ok(result)
    }
}
