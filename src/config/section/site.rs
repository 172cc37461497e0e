//! `[site]` configuration.
//!
//! Basic site identity: title, description, author, canonical website
//! address, base path, and the default Open Graph image.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! description = "A personal blog"
//! website = "https://myblog.example.com/"
//! base = "/"
//! author = "Alice"
//! og_image = "/og-image.jpg"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Site metadata consumed by page `<head>` rendering and feed generation.
/// Custom fields go in `[site.extra]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Site description (meta description, feed subtitle).
    pub description: String,

    /// Canonical website address (e.g., "https://example.com/").
    pub website: Option<String>,

    /// Base path the site is served under (e.g., "/" or "/blog/").
    pub base: String,

    /// Author name shown in page metadata.
    pub author: String,

    /// Default Open Graph image, used when a page provides none.
    pub og_image: String,

    /// Custom fields for templates.
    #[serde(default)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            website: None,
            base: "/".into(),
            author: String::new(),
            og_image: "/og-image.jpg".into(),
            extra: FxHashMap::default(),
        }
    }
}

impl SiteConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `website`, if set, must be a valid http(s) URL with a host
    /// - `base` must start with `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        const WEBSITE: FieldPath = FieldPath::new("site.website");
        const BASE: FieldPath = FieldPath::new("site.base");

        if let Some(url_str) = &self.website {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            WEBSITE,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            WEBSITE,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        WEBSITE,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if !self.base.starts_with('/') {
            diag.error_with_hint(
                BASE,
                format!("base path `{}` must start with `/`", self.base),
                "use \"/\" for root deployments or \"/blog/\" for a subpath",
            );
        }
    }
}
