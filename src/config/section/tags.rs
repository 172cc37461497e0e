//! `[tags]` configuration.
//!
//! # Example
//!
//! ```toml
//! [tags]
//! title = "Tags"
//! description = "All tags of Posts"
//! introduce = "Click a tag to filter posts."
//! ```

use serde::{Deserialize, Serialize};

/// Tags page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    /// Tags page title.
    pub title: String,
    /// Tags page description.
    pub description: String,
    /// Introductory paragraph shown above the tag cloud.
    pub introduce: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            title: "Tags".into(),
            description: String::new(),
            introduce: String::new(),
        }
    }
}
