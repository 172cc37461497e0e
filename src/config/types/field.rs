//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A wrapper for config field paths used in diagnostics.
///
/// Sections reference their fields by dotted path, e.g.
/// `FieldPath::new("posts.home.size")`, so an error can point the user at
/// the exact `theme.toml` key to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
