//! Sampling statistics: descriptive summaries, critical values, and the
//! population estimator.

pub mod critical;
pub mod descriptive;
pub mod estimator;

pub use critical::critical_value_95;
pub use estimator::SampleEstimator;
