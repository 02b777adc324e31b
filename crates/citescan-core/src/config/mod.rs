//! Configuration for the citescan pipeline.

pub mod corpus_config;
pub mod sampling_config;

pub use corpus_config::CorpusConfig;
pub use sampling_config::{CriticalValueSource, SamplingConfig};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration, loadable from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CitescanConfig {
    pub corpus: CorpusConfig,
    pub sampling: SamplingConfig,
}

impl CitescanConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
