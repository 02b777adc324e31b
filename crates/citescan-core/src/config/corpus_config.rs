//! Corpus (MediaWiki API) configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the MediaWiki corpus client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CorpusConfig {
    /// MediaWiki Action API endpoint.
    pub endpoint: Option<String>,
    /// User-Agent header sent with every request.
    pub user_agent: Option<String>,
    /// Tracking category the population is drawn from.
    pub category: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Delay between consecutive requests, in milliseconds.
    pub pacing_ms: Option<u64>,
}

impl CorpusConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "https://en.wikipedia.org/w/api.php";
    pub const DEFAULT_USER_AGENT: &'static str =
        "citescan/0.1 (Educational Research; Statistical Sampling)";
    pub const DEFAULT_CATEGORY: &'static str = "All articles with unsourced statements";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    pub const DEFAULT_PACING_MS: u64 = 200;

    pub fn effective_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(Self::DEFAULT_ENDPOINT)
    }

    pub fn effective_user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(Self::DEFAULT_USER_AGENT)
    }

    pub fn effective_category(&self) -> &str {
        self.category.as_deref().unwrap_or(Self::DEFAULT_CATEGORY)
    }

    pub fn effective_timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(Self::DEFAULT_TIMEOUT_SECS)
    }

    pub fn effective_pacing_ms(&self) -> u64 {
        self.pacing_ms.unwrap_or(Self::DEFAULT_PACING_MS)
    }
}
