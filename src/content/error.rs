//! Frontmatter validation errors.

use owo_colors::OwoColorize;
use std::fmt;
use thiserror::Error;

// ============================================================================
// SchemaError
// ============================================================================

/// Expected value shape for a frontmatter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    String,
    Boolean,
    StringArray,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::String => "a string",
            Self::Boolean => "a boolean",
            Self::StringArray => "an array of strings",
        };
        f.write_str(text)
    }
}

/// A single field failure in a frontmatter record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` must be {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: Expected,
    },

    #[error("field `{0}` is not a valid date (use \"YYYY-MM-DD\" or \"YYYY-MM-DDTHH:MM:SSZ\")")]
    InvalidDate(&'static str),

    #[error("field `{field}` has unsupported value `{value}` (allowed: {})", allowed.join(", "))]
    InvalidValue {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

// ============================================================================
// SchemaErrors
// ============================================================================

/// Every field failure found in one record.
///
/// Validation rejects a record wholesale; all problems are collected first
/// so a content author fixes the frontmatter in one pass.
#[derive(Debug, Default)]
pub struct SchemaErrors {
    errors: Vec<SchemaError>,
}

impl SchemaErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: SchemaError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[SchemaError] {
        &self.errors
    }
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "frontmatter validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{} {err}", "→".red())?;
            if i + 1 < self.errors.len() {
                writeln!(f)?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        assert_eq!(
            SchemaError::MissingField("title").to_string(),
            "missing required field `title`"
        );
        assert_eq!(
            SchemaError::TypeMismatch {
                field: "tags",
                expected: Expected::StringArray,
            }
            .to_string(),
            "field `tags` must be an array of strings"
        );
        assert!(
            SchemaError::InvalidDate("pubDate")
                .to_string()
                .contains("pubDate")
        );
    }

    #[test]
    fn test_invalid_value_lists_allowed() {
        let err = SchemaError::InvalidValue {
            field: "heroImageLayout",
            value: "center".into(),
            allowed: &["left", "right"],
        };
        let display = err.to_string();
        assert!(display.contains("center"));
        assert!(display.contains("left, right"));
    }

    #[test]
    fn test_errors_accumulate() {
        let mut errors = SchemaErrors::new();
        assert!(errors.is_empty());

        errors.push(SchemaError::MissingField("title"));
        errors.push(SchemaError::InvalidDate("pubDate"));

        assert!(errors.has_errors());
        assert_eq!(errors.len(), 2);

        let display = format!("{errors}");
        assert!(display.contains("title"));
        assert!(display.contains("pubDate"));
    }
}
