//! citescan-corpus: document retrieval and estimation orchestration.
//!
//! Everything with I/O lives here: the [`DocumentSupplier`] abstraction,
//! the MediaWiki Action API client, random sample collection, and the
//! end-to-end [`EstimationPipeline`]. Individual document failures are
//! reported and skipped — they never corrupt the aggregate statistics.

pub mod error;
pub mod mediawiki;
pub mod pipeline;
pub mod sampler;
pub mod supplier;

// Re-exports for convenience
pub use error::{CorpusError, PipelineError};
pub use mediawiki::MediaWikiClient;
pub use pipeline::EstimationPipeline;
pub use sampler::CategorySampler;
pub use supplier::{DocumentSupplier, StaticSupplier};
