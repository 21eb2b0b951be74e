//! Configuration for the fetcher module.

use serde::{Deserialize, Serialize};

/// Configuration for image downloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Maximum downloads in flight across the whole run.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Timeout for a single request in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_concurrency() -> usize {
    10
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("carousel-xtractor/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl FetcherConfig {
    /// Sets the concurrency ceiling.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
