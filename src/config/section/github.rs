//! `[github]` configuration.
//!
//! Toggles the GitHub integration that decorates project cards with live
//! repository data. The API client itself lives in the build pipeline;
//! this section only carries its settings.
//!
//! # Example
//!
//! ```toml
//! [github]
//! enable = true
//! cache_duration = 5700     # seconds
//! use_mock_data = true      # serve canned data during development
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// GitHub integration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Enable fetching repository data (stars, forks) at build time.
    pub enable: bool,

    /// How long fetched repository data stays fresh, in seconds.
    pub cache_duration: u64,

    /// Serve canned repository data instead of calling the API.
    /// Useful for offline development and avoiding rate limits.
    pub use_mock_data: bool,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            enable: true,
            // 1.5 hours plus a 5 minute grace period
            cache_duration: 60 * 60 * 3 / 2 + 60 * 5,
            use_mock_data: true,
        }
    }
}

impl GithubConfig {
    /// Validate GitHub integration settings.
    ///
    /// # Checks
    /// - An enabled integration must have a non-zero cache duration
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        const CACHE_DURATION: FieldPath = FieldPath::new("github.cache_duration");

        if self.enable && self.cache_duration == 0 {
            diag.error_with_hint(
                CACHE_DURATION,
                "cache duration must be non-zero while the integration is enabled",
                "the default is 5700 seconds (1.5 hours + 5 minutes)",
            );
        }
    }
}
