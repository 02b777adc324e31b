//! Shared domain types.

pub mod estimate;
pub mod sample;
pub mod tags;

pub use estimate::{
    ConfidenceInterval, EstimationResult, Percentiles, SampleSummary,
};
pub use sample::{DocumentRef, SampleObservation};
pub use tags::{CategorizedTags, DetailedTagCount, FamilyBreakdown, TagCategory, TagMatch};
