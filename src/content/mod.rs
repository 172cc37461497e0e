//! Content schema: frontmatter extraction and post validation.
//!
//! The build pipeline hands each discovered content file to this module.
//! [`frontmatter::extract_frontmatter`] splits off the metadata block as a
//! raw record; [`PostSchema::validate`] turns that record into a
//! [`PostDescriptor`] or rejects it with a [`SchemaErrors`] listing every
//! offending field.

mod descriptor;
mod error;
pub mod frontmatter;
mod schema;

pub use descriptor::PostDescriptor;
pub use error::{Expected, SchemaError, SchemaErrors};
pub use frontmatter::extract_frontmatter;
pub use schema::{HERO_IMAGE_DIR, OG_IMAGE_DIR, PostSchema};

/// A JSON object map holding one raw frontmatter record.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
