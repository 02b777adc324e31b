//! Population-total estimation from a simple random sample.

use citescan_core::config::CriticalValueSource;
use citescan_core::errors::EstimateError;
use citescan_core::types::{ConfidenceInterval, EstimationResult, SampleObservation};

use super::critical::critical_value_95;
use super::descriptive::summarize;

/// Sampling estimator: extrapolates per-document tag counts to a
/// population total with a 95% confidence interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleEstimator {
    source: CriticalValueSource,
}

impl SampleEstimator {
    /// Estimator with the default (banded) critical-value source.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: CriticalValueSource) -> Self {
        Self { source }
    }

    /// Estimate the population total from a sample of observations.
    ///
    /// Fails with [`EstimateError::EmptySample`] for an empty sample and
    /// with [`EstimateError::InsufficientSample`] for a single observation,
    /// where Bessel's correction leaves the variance undefined.
    pub fn estimate(
        &self,
        observations: &[SampleObservation],
        population_size: u64,
    ) -> Result<EstimationResult, EstimateError> {
        let n = observations.len();
        if n == 0 {
            return Err(EstimateError::EmptySample);
        }
        if n < 2 {
            return Err(EstimateError::InsufficientSample { n });
        }

        let counts: Vec<u64> = observations.iter().map(|o| o.tag_count).collect();
        let n_f = n as f64;
        let mean = counts.iter().sum::<u64>() as f64 / n_f;

        // Bessel-corrected sample variance.
        let variance = counts
            .iter()
            .map(|&c| (c as f64 - mean).powi(2))
            .sum::<f64>()
            / (n_f - 1.0);
        let std_deviation = variance.sqrt();
        let std_error = std_deviation / n_f.sqrt();

        let t = critical_value_95(n - 1, self.source);
        let margin_of_error_mean = t * std_error;

        let population = population_size as f64;
        let estimated_total = mean * population;
        let margin_of_error = margin_of_error_mean * population;

        let confidence_interval = ConfidenceInterval {
            lower: (estimated_total - margin_of_error).max(0.0),
            upper: estimated_total + margin_of_error,
        };

        Ok(EstimationResult {
            sample_size: n,
            population_size,
            mean_tags_per_document: mean,
            std_deviation,
            std_error,
            estimated_total,
            margin_of_error,
            confidence_interval,
            sample: summarize(&counts),
        })
    }
}
