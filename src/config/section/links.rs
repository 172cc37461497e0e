//! `[links]` configuration: header/footer navigation and social links.
//!
//! # Example
//!
//! ```toml
//! [[links.header]]
//! name = "Posts"
//! url = "/posts"
//!
//! [[links.footer]]
//! name = "Tags"
//! url = "/tags"
//!
//! [[links.social]]
//! name = "github"
//! url = "https://github.com/alice"
//! icon = "icon-[ri--github-fill]"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A navigation link (header or footer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Display name.
    pub name: String,
    /// Target URL or site-relative path.
    pub url: String,
}

/// A social profile link with its icon class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Platform name.
    pub name: String,
    /// Profile URL.
    pub url: String,
    /// Icon class (iconify).
    pub icon: String,
}

/// Navigation and social link lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Header navigation entries, in display order.
    pub header: Vec<Link>,
    /// Footer navigation entries, in display order.
    pub footer: Vec<Link>,
    /// Social profile links.
    pub social: Vec<SocialLink>,
}

impl LinksConfig {
    /// Validate link lists: every entry needs a name and a url, and
    /// social entries additionally need an icon.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        Self::validate_list(&self.header, FieldPath::new("links.header"), diag);
        Self::validate_list(&self.footer, FieldPath::new("links.footer"), diag);

        const SOCIAL: FieldPath = FieldPath::new("links.social");
        for (i, link) in self.social.iter().enumerate() {
            if link.name.is_empty() || link.url.is_empty() {
                diag.error(SOCIAL, format!("entry {i} is missing a name or url"));
            }
            if link.icon.is_empty() {
                diag.error_with_hint(
                    SOCIAL,
                    format!("entry {i} (`{}`) has no icon", link.name),
                    "pick an icon class from https://icon-sets.iconify.design/",
                );
            }
        }
    }

    fn validate_list(links: &[Link], field: FieldPath, diag: &mut ConfigDiagnostics) {
        for (i, link) in links.iter().enumerate() {
            if link.name.is_empty() || link.url.is_empty() {
                diag.error(field, format!("entry {i} is missing a name or url"));
            }
        }
    }
}
