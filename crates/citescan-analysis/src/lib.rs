//! citescan-analysis: the algorithmic core of citescan.
//!
//! Two independent components with a shared data contract (a sequence of
//! non-negative per-document tag counts):
//! - Recognizer: scans raw wiki markup for a fixed catalog of citation-flag
//!   template families and produces exact counts, per-family breakdowns,
//!   and category groupings
//! - Stats: turns per-document counts into a population-level extrapolation
//!   with descriptive statistics and a 95% confidence interval
//!
//! Both are synchronous, side-effect-free functions over in-memory data and
//! are safe to call from any number of concurrent callers.

pub mod recognizer;
pub mod report;
pub mod stats;

// Re-exports for convenience
pub use recognizer::{TagPatternSpec, TagRecognizer, TAG_CATALOG};
pub use report::render_report;
pub use stats::{critical_value_95, SampleEstimator};
