//! Post frontmatter schema.
//!
//! Converts one untyped frontmatter record into a [`PostDescriptor`] or
//! rejects it with every field failure collected. The validator is a pure
//! function of the record and the defaults captured at construction, so
//! records may be validated in parallel with no coordination.

use super::descriptor::PostDescriptor;
use super::error::{Expected, SchemaError, SchemaErrors};
use super::{JsonMap, frontmatter};
use crate::config::{HeroImageAspectRatio, HeroImageLayout, PostsConfig};
use crate::utils::DateTimeUtc;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Directory post hero images are served from.
pub const HERO_IMAGE_DIR: &str = "/hero-images/";

/// Directory Open Graph images are served from.
pub const OG_IMAGE_DIR: &str = "/og-images/";

/// Validator for post frontmatter records.
///
/// Defaults (author, hero image aspect ratio) come from `[posts]` and are
/// captured at construction; nothing is read from ambient globals, so
/// tests can run the schema against alternate defaults.
#[derive(Debug, Clone)]
pub struct PostSchema {
    default_author: String,
    default_aspect_ratio: HeroImageAspectRatio,
}

impl PostSchema {
    pub fn new(posts: &PostsConfig) -> Self {
        Self {
            default_author: posts.author.clone(),
            default_aspect_ratio: posts.default_hero_image_aspect_ratio,
        }
    }

    /// Validate one raw frontmatter record.
    ///
    /// All field errors are collected before reporting; on failure the
    /// record is rejected wholesale and no partial descriptor escapes.
    pub fn validate(&self, record: &JsonMap) -> Result<PostDescriptor, SchemaErrors> {
        let mut errors = SchemaErrors::new();

        let title = require_string(record, "title", &mut errors);
        let description = require_string(record, "description", &mut errors);
        let publish_date = require_date(record, "pubDate", &mut errors);
        let updated_date = optional_date(record, "updatedDate", &mut errors);
        let recommend = optional_bool(record, "recommend", &mut errors).unwrap_or(false);
        let author = optional_string(record, "author", &mut errors)
            .unwrap_or_else(|| self.default_author.clone());

        let hero_image = optional_string(record, "heroImage", &mut errors)
            .and_then(|value| normalize_image_path(&value, HERO_IMAGE_DIR));
        let og_image = optional_string(record, "ogImage", &mut errors)
            .and_then(|value| normalize_image_path(&value, OG_IMAGE_DIR));

        let hero_image_layout = optional_string(record, "heroImageLayout", &mut errors)
            .and_then(|value| {
                parse_enum(
                    "heroImageLayout",
                    value,
                    HeroImageLayout::from_str,
                    HeroImageLayout::ALLOWED,
                    &mut errors,
                )
            });
        let hero_image_aspect_ratio = optional_string(record, "heroImageAspectRatio", &mut errors)
            .and_then(|value| {
                parse_enum(
                    "heroImageAspectRatio",
                    value,
                    HeroImageAspectRatio::from_str,
                    HeroImageAspectRatio::ALLOWED,
                    &mut errors,
                )
            })
            .unwrap_or(self.default_aspect_ratio);

        let tags = require_string_array(record, "tags", &mut errors);

        if errors.has_errors() {
            return Err(errors);
        }

        // Required fields are Some whenever no error was recorded
        let (Some(title), Some(description), Some(publish_date), Some(tags)) =
            (title, description, publish_date, tags)
        else {
            return Err(errors);
        };

        Ok(PostDescriptor {
            title,
            description,
            publish_date,
            updated_date,
            recommend,
            author,
            hero_image,
            og_image,
            hero_image_layout,
            hero_image_aspect_ratio,
            tags,
        })
    }

    /// Extract frontmatter from a content file and validate it.
    ///
    /// Failures name the file along with each field and reason, so a
    /// content author can fix the frontmatter without reading this code.
    pub fn validate_document(&self, path: &Path, content: &str) -> Result<PostDescriptor> {
        let (record, _body) = frontmatter::extract_frontmatter(content)
            .with_context(|| format!("{}: unreadable frontmatter", path.display()))?
            .with_context(|| format!("{}: no frontmatter block found", path.display()))?;

        self.validate(&record)
            .with_context(|| format!("{}: invalid frontmatter", path.display()))
    }
}

// ============================================================================
// image path normalization
// ============================================================================

/// Normalize an image reference into its canonical path form.
///
/// Absolute URLs and paths already rooted under `dir` pass through
/// unchanged; bare filenames are rooted under `dir`. Empty input means
/// "no image". Idempotent: normalizing an already-normalized value yields
/// the same value.
fn normalize_image_path(value: &str, dir: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value.starts_with("http") || value.starts_with(dir) {
        return Some(value.to_string());
    }
    Some(format!("{dir}{value}"))
}

// ============================================================================
// field accessors
// ============================================================================

fn require_string(record: &JsonMap, field: &'static str, errors: &mut SchemaErrors) -> Option<String> {
    match record.get(field) {
        None | Some(Value::Null) => {
            errors.push(SchemaError::MissingField(field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(SchemaError::TypeMismatch {
                field,
                expected: Expected::String,
            });
            None
        }
    }
}

fn optional_string(record: &JsonMap, field: &'static str, errors: &mut SchemaErrors) -> Option<String> {
    match record.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(SchemaError::TypeMismatch {
                field,
                expected: Expected::String,
            });
            None
        }
    }
}

fn optional_bool(record: &JsonMap, field: &'static str, errors: &mut SchemaErrors) -> Option<bool> {
    match record.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => {
            errors.push(SchemaError::TypeMismatch {
                field,
                expected: Expected::Boolean,
            });
            None
        }
    }
}

fn require_date(
    record: &JsonMap,
    field: &'static str,
    errors: &mut SchemaErrors,
) -> Option<DateTimeUtc> {
    match record.get(field) {
        None | Some(Value::Null) => {
            errors.push(SchemaError::MissingField(field));
            None
        }
        Some(value) => parse_date(value, field, errors),
    }
}

fn optional_date(
    record: &JsonMap,
    field: &'static str,
    errors: &mut SchemaErrors,
) -> Option<DateTimeUtc> {
    match record.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => parse_date(value, field, errors),
    }
}

fn parse_date(value: &Value, field: &'static str, errors: &mut SchemaErrors) -> Option<DateTimeUtc> {
    let parsed = value.as_str().and_then(DateTimeUtc::parse);
    if parsed.is_none() {
        errors.push(SchemaError::InvalidDate(field));
    }
    parsed
}

fn require_string_array(
    record: &JsonMap,
    field: &'static str,
    errors: &mut SchemaErrors,
) -> Option<Vec<String>> {
    let mismatch = SchemaError::TypeMismatch {
        field,
        expected: Expected::StringArray,
    };
    match record.get(field) {
        None | Some(Value::Null) => {
            errors.push(SchemaError::MissingField(field));
            None
        }
        Some(Value::Array(items)) => {
            let mut tags = Vec::with_capacity(items.len());
            for item in items {
                match item.as_str() {
                    Some(s) => tags.push(s.to_string()),
                    None => {
                        errors.push(mismatch);
                        return None;
                    }
                }
            }
            Some(tags)
        }
        Some(_) => {
            errors.push(mismatch);
            None
        }
    }
}

fn parse_enum<T>(
    field: &'static str,
    value: String,
    parse: impl Fn(&str) -> Option<T>,
    allowed: &'static [&'static str],
    errors: &mut SchemaErrors,
) -> Option<T> {
    match parse(&value) {
        Some(parsed) => Some(parsed),
        None => {
            errors.push(SchemaError::InvalidValue {
                field,
                value,
                allowed,
            });
            None
        }
    }
}

// ============================================================================
// tests
// ============================================================================
