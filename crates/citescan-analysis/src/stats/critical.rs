//! Two-sided 95% critical values for the confidence interval.
//!
//! The default source is a banded step table keyed by degrees-of-freedom
//! ranges — a coarse approximation of the t-distribution's inverse CDF
//! that reproduces the reference band values exactly. The `Exact` source
//! computes the same quantile via `statrs` instead.

use citescan_core::config::CriticalValueSource;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// (minimum degrees of freedom, critical value) bands, highest first.
const T_BANDS: &[(usize, f64)] = &[
    (1000, 1.96),
    (500, 1.96),
    (200, 1.97),
    (100, 1.98),
    (60, 2.00),
    (40, 2.02),
    (30, 2.04),
    (25, 2.06),
    (20, 2.09),
    (15, 2.13),
    (10, 2.23),
    (5, 2.57),
];

/// Conservative value for df < 5.
const T_SMALL_SAMPLE: f64 = 2.78;

/// Critical value for a two-sided 95% interval at `df` degrees of freedom.
pub fn critical_value_95(df: usize, source: CriticalValueSource) -> f64 {
    match source {
        CriticalValueSource::Banded => banded(df),
        CriticalValueSource::Exact => exact(df),
    }
}

fn banded(df: usize) -> f64 {
    for &(min_df, t) in T_BANDS {
        if df >= min_df {
            return t;
        }
    }
    T_SMALL_SAMPLE
}

/// Exact quantile t_{0.975, df}. Falls back to the banded table if the
/// distribution cannot be constructed or the quantile is not finite.
fn exact(df: usize) -> f64 {
    match StudentsT::new(0.0, 1.0, df as f64) {
        Ok(dist) => {
            let t = dist.inverse_cdf(0.975);
            if t.is_finite() {
                t
            } else {
                banded(df)
            }
        }
        Err(_) => banded(df),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banded_band_boundaries() {
        assert_eq!(banded(1000), 1.96);
        assert_eq!(banded(999), 1.96); // still in the ≥500 band
        assert_eq!(banded(200), 1.97);
        assert_eq!(banded(199), 1.98);
        assert_eq!(banded(60), 2.00);
        assert_eq!(banded(30), 2.04);
        assert_eq!(banded(10), 2.23);
        assert_eq!(banded(5), 2.57);
        assert_eq!(banded(4), 2.78);
        assert_eq!(banded(1), 2.78);
    }

    #[test]
    fn test_banded_is_monotonically_decreasing() {
        let mut previous = f64::MAX;
        for df in 1..=1200 {
            let t = banded(df);
            assert!(t <= previous, "band increased at df={df}");
            previous = t;
        }
    }

    #[test]
    fn test_exact_small_df() {
        // t_{0.975, 2} = 4.303 to three decimals.
        assert!((exact(2) - 4.303).abs() < 1e-3);
    }

    #[test]
    fn test_exact_converges_to_normal() {
        assert!((exact(100_000) - 1.96).abs() < 1e-2);
    }

    #[test]
    fn test_source_selection() {
        assert_eq!(critical_value_95(2, CriticalValueSource::Banded), 2.78);
        assert!(critical_value_95(2, CriticalValueSource::Exact) > 4.0);
    }
}
