//! `[experience]` configuration and entries.
//!
//! # Example
//!
//! ```toml
//! [experience]
//! enable = true
//! title = "Experience"
//! description = "Where I studied and worked."
//!
//! [[experience.entries]]
//! title = "Software Engineer"
//! organization = "Acme"
//! location = "Remote"
//! start_date = "2021-06"
//! end_date = "Present"
//! kind = "work"
//! description = "Build and run the billing platform."
//! skills = ["Rust", "PostgreSQL"]
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::utils::DateTimeUtc;
use serde::{Deserialize, Serialize};

/// Marker for an experience entry that is still ongoing.
pub const PRESENT: &str = "Present";

/// School or work experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Education,
    #[default]
    Work,
}

/// One experience entry (a job or a degree).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    /// Position or degree title.
    pub title: String,
    /// Company or school name.
    pub organization: String,
    /// Location.
    pub location: String,
    /// Start date, "YYYY-MM" or "YYYY-MM-DD".
    pub start_date: String,
    /// End date in the same format, or `Present` while ongoing.
    pub end_date: String,
    pub kind: ExperienceKind,
    /// Free-form description.
    pub description: String,
    /// Related skills or achievements.
    pub skills: Vec<String>,
    /// Company or school logo.
    pub logo: Option<String>,
}

/// Experience page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceConfig {
    /// Enable the experience section.
    pub enable: bool,
    /// Experience page title.
    pub title: String,
    /// Experience page description.
    pub description: String,
    /// Introductory paragraph.
    pub intro: Option<String>,
    /// Entries, newest first by convention.
    pub entries: Vec<Experience>,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            enable: false,
            title: "Experience".into(),
            description: String::new(),
            intro: None,
            entries: Vec::new(),
        }
    }
}

impl ExperienceConfig {
    /// Validate experience entries.
    ///
    /// # Checks
    /// - `start_date` must be a real date ("YYYY-MM" or "YYYY-MM-DD")
    /// - `end_date` likewise, or the literal `Present`
    /// - Entries need a title and an organization
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        const ENTRIES: FieldPath = FieldPath::new("experience.entries");

        for (i, entry) in self.entries.iter().enumerate() {
            if entry.title.is_empty() || entry.organization.is_empty() {
                diag.error(
                    ENTRIES,
                    format!("entry {i} is missing a title or organization"),
                );
            }

            if DateTimeUtc::parse_loose(&entry.start_date).is_none() {
                diag.error_with_hint(
                    ENTRIES,
                    format!("entry {i} start_date `{}` is not a date", entry.start_date),
                    "use \"YYYY-MM\" or \"YYYY-MM-DD\"",
                );
            }

            if entry.end_date != PRESENT && DateTimeUtc::parse_loose(&entry.end_date).is_none() {
                diag.error_with_hint(
                    ENTRIES,
                    format!("entry {i} end_date `{}` is not a date", entry.end_date),
                    "use \"YYYY-MM\", \"YYYY-MM-DD\" or \"Present\"",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const ENTRY: &str = r#"[[experience.entries]]
title = "Software Engineer"
organization = "Acme"
location = "Remote"
start_date = "2021-06"
end_date = "Present"
kind = "work"
skills = ["Rust", "PostgreSQL"]"#;

    #[test]
    fn test_defaults_disabled() {
        let config = test_parse_config("");
        assert!(!config.experience.enable);
        assert_eq!(config.experience.title, "Experience");
        assert!(config.experience.entries.is_empty());
    }

    #[test]
    fn test_parse_entry() {
        let config = test_parse_config(ENTRY);
        let entry = &config.experience.entries[0];
        assert_eq!(entry.organization, "Acme");
        assert_eq!(entry.kind, ExperienceKind::Work);
        assert_eq!(entry.end_date, PRESENT);
        assert_eq!(entry.skills, vec!["Rust", "PostgreSQL"]);

        let mut diag = ConfigDiagnostics::new();
        config.experience.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_bad_start_date() {
        let config = test_parse_config(
            "[[experience.entries]]\ntitle = \"t\"\norganization = \"o\"\nstart_date = \"spring 2020\"\nend_date = \"Present\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.experience.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_validate_end_date_accepts_present_only_as_keyword() {
        let config = test_parse_config(
            "[[experience.entries]]\ntitle = \"t\"\norganization = \"o\"\nstart_date = \"2020-01\"\nend_date = \"now\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.experience.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
