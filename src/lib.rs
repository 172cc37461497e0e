//! Configuration and content schema layer for the litho blog theme.
//!
//! This crate owns two things the surrounding build pipeline consumes:
//!
//! - **Theme configuration** (`theme.toml`): site metadata, navigation and
//!   social links, the skills showcase, the GitHub integration toggle, and
//!   post/tag/project/experience display settings. See [`config`].
//! - **Content schema**: frontmatter extraction and validation for blog
//!   posts. A raw metadata record either becomes a validated
//!   [`content::PostDescriptor`] or is rejected with a diagnostic naming
//!   every offending field. See [`content`].
//!
//! Page rendering, routing, asset processing, and the GitHub API client
//! gated by `[github]` live elsewhere; this crate only defines and checks
//! the data they consume.

pub mod config;
pub mod content;
pub mod logger;
pub mod utils;

pub use config::ThemeConfig;
pub use content::{PostDescriptor, PostSchema};
