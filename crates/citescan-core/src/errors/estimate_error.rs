//! Estimation errors.

/// Errors from the sampling estimator.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// No observations were supplied; the mean is undefined.
    #[error("no sample observations provided")]
    EmptySample,

    /// A single observation leaves the sample variance undefined
    /// (division by zero in Bessel's correction). The estimator rejects
    /// this case rather than silently reporting a zero-width interval.
    #[error("sample of {n} observation(s) is too small to estimate variance (need at least 2)")]
    InsufficientSample { n: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EstimateError::EmptySample.to_string(),
            "no sample observations provided"
        );
        assert!(EstimateError::InsufficientSample { n: 1 }
            .to_string()
            .contains("at least 2"));
    }
}
