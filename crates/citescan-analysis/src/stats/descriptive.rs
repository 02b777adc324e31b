//! Descriptive statistics over a sample of tag counts.

use citescan_core::types::{Percentiles, SampleSummary};
use rustc_hash::FxHashMap;

/// Summarize a non-empty sequence of counts.
///
/// The input is copied and sorted internally; the caller's sequence is
/// never mutated.
pub(crate) fn summarize(counts: &[u64]) -> SampleSummary {
    debug_assert!(!counts.is_empty());

    let mut sorted = counts.to_vec();
    sorted.sort_unstable();

    SampleSummary {
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        median: median(&sorted),
        modes: modes(counts),
        percentiles: Percentiles {
            p25: percentile(&sorted, 25.0),
            p50: percentile(&sorted, 50.0),
            p75: percentile(&sorted, 75.0),
            p90: percentile(&sorted, 90.0),
            p95: percentile(&sorted, 95.0),
            p99: percentile(&sorted, 99.0),
        },
        zero_tag_documents: counts.iter().filter(|&&c| c == 0).count(),
        multi_tag_documents: counts.iter().filter(|&&c| c > 1).count(),
    }
}

/// Median of a sorted sequence: the middle value for odd n, the average of
/// the two middle values for even n.
fn median(sorted: &[u64]) -> f64 {
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) as f64 / 2.0
    } else {
        sorted[middle] as f64
    }
}

/// Values sharing the maximum frequency, ascending.
///
/// Returns `None` when no value is more frequent than every other — every
/// distinct value tied at the maximum frequency, including the degenerate
/// all-distinct case.
fn modes(counts: &[u64]) -> Option<Vec<u64>> {
    let mut frequency: FxHashMap<u64, usize> = FxHashMap::default();
    for &count in counts {
        *frequency.entry(count).or_insert(0) += 1;
    }

    let max_freq = frequency.values().copied().max().unwrap_or(0);
    let mut modes: Vec<u64> = frequency
        .iter()
        .filter(|&(_, &freq)| freq == max_freq)
        .map(|(&value, _)| value)
        .collect();

    if modes.len() == frequency.len() {
        return None;
    }

    modes.sort_unstable();
    Some(modes)
}

/// Compute a percentile by linear interpolation between order statistics,
/// using index (p/100) × (n − 1).
fn percentile(sorted: &[u64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0] as f64;
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1] as f64
    } else {
        sorted[lower] as f64 * (1.0 - frac) + sorted[upper] as f64 * frac
    }
}
