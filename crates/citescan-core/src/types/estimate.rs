//! Estimation result types.
//!
//! An [`EstimationResult`] is a read-only snapshot computed fresh from a
//! sequence of observations; nothing here is ever mutated after
//! construction.

use serde::{Deserialize, Serialize};

/// Two-sided 95% confidence interval around the estimated total.
///
/// The lower bound is clamped to 0 — tag counts cannot be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Percentiles of the sampled count distribution, computed by linear
/// interpolation between order statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

/// Descriptive statistics over the sampled counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Smallest observed count.
    pub min: u64,
    /// Largest observed count.
    pub max: u64,
    /// Median count (average of the two middle values for even n).
    pub median: f64,
    /// Values sharing the maximum frequency, ascending. `None` when no
    /// value is more frequent than every other.
    pub modes: Option<Vec<u64>>,
    pub percentiles: Percentiles,
    /// Documents in the sample with zero tags.
    pub zero_tag_documents: usize,
    /// Documents in the sample with more than one tag.
    pub multi_tag_documents: usize,
}

/// Population-level extrapolation from a simple random sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Number of observations the estimate is based on.
    pub sample_size: usize,
    /// Size of the document population being extrapolated to.
    pub population_size: u64,
    /// Sample mean tags per document.
    pub mean_tags_per_document: f64,
    /// Sample standard deviation (Bessel-corrected).
    pub std_deviation: f64,
    /// Standard error of the mean.
    pub std_error: f64,
    /// Point estimate of the population total: mean × population size.
    pub estimated_total: f64,
    /// Half-width of the confidence interval, scaled to the population.
    pub margin_of_error: f64,
    pub confidence_interval: ConfidenceInterval,
    pub sample: SampleSummary,
}

impl EstimationResult {
    /// Margin of error relative to the point estimate, as a fraction.
    /// Returns 0 when the estimate itself is 0.
    pub fn relative_margin(&self) -> f64 {
        if self.estimated_total > 0.0 {
            self.margin_of_error / self.estimated_total
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_json() {
        let interval = ConfidenceInterval {
            lower: 0.0,
            upper: 360.5,
        };
        let json = serde_json::to_value(interval).unwrap();
        assert_eq!(json["lower"], 0.0);
        assert_eq!(json["upper"], 360.5);
    }

    #[test]
    fn test_relative_margin_zero_estimate() {
        let result = EstimationResult {
            sample_size: 5,
            population_size: 1000,
            mean_tags_per_document: 0.0,
            std_deviation: 0.0,
            std_error: 0.0,
            estimated_total: 0.0,
            margin_of_error: 0.0,
            confidence_interval: ConfidenceInterval {
                lower: 0.0,
                upper: 0.0,
            },
            sample: SampleSummary {
                min: 0,
                max: 0,
                median: 0.0,
                modes: Some(vec![0]),
                percentiles: Percentiles {
                    p25: 0.0,
                    p50: 0.0,
                    p75: 0.0,
                    p90: 0.0,
                    p95: 0.0,
                    p99: 0.0,
                },
                zero_tag_documents: 5,
                multi_tag_documents: 0,
            },
        };
        assert_eq!(result.relative_margin(), 0.0);
    }
}
