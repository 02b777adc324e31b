//! citescan-core: shared foundations for the citescan workspace.
//!
//! This crate provides the pieces every other citescan crate builds on:
//! - Types: the tag/category domain model, sample observations, and the
//!   estimation result snapshot
//! - Errors: estimation and configuration error families
//! - Config: corpus and sampling configuration with TOML loading
//! - Tracing: process-wide tracing/logging initialization

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use config::{CitescanConfig, CorpusConfig, CriticalValueSource, SamplingConfig};
pub use errors::{ConfigError, EstimateError};
pub use types::{
    CategorizedTags, ConfidenceInterval, DetailedTagCount, DocumentRef, EstimationResult,
    FamilyBreakdown, Percentiles, SampleObservation, SampleSummary, TagCategory, TagMatch,
};
