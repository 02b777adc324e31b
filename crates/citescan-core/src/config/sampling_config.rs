//! Sampling and estimation configuration.

use serde::{Deserialize, Serialize};

/// How the 95% critical value is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalValueSource {
    /// Banded step table keyed by degrees-of-freedom ranges. The default;
    /// reproduces the reference band values exactly.
    #[default]
    Banded,
    /// Exact Student's-t quantile via `statrs`. More accurate at small n
    /// (e.g. df = 2 gives 4.303 instead of the banded 2.78).
    Exact,
}

/// Configuration for sample collection and estimation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SamplingConfig {
    /// Number of documents to sample.
    pub sample_size: Option<usize>,
    /// Known population size. When set, the pipeline skips querying the
    /// corpus for the category size.
    pub population_override: Option<u64>,
    /// Critical-value source for the confidence interval.
    pub critical_value_source: CriticalValueSource,
}

impl SamplingConfig {
    pub const DEFAULT_SAMPLE_SIZE: usize = 100;

    pub fn effective_sample_size(&self) -> usize {
        self.sample_size.unwrap_or(Self::DEFAULT_SAMPLE_SIZE)
    }
}
