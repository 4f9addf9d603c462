//! Prediction endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the prediction endpoint lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host, and port. Default: `http://127.0.0.1:8000`.
    pub base_url: Option<String>,
    /// Path appended to the base URL. Default: `/items/10`.
    pub path: Option<String>,
    /// Request timeout in milliseconds. Default: none (transport default).
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(defaults::DEFAULT_BASE_URL)
    }

    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(defaults::DEFAULT_PATH)
    }

    /// Full endpoint URL without the query string.
    ///
    /// Joins base and path with exactly one `/` between them.
    pub fn endpoint(&self) -> String {
        let base = self.effective_base_url().trim_end_matches('/');
        let path = self.effective_path().trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
