//! Theme configuration management for `theme.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── links      # [links]
//! │   ├── skills     # [skills]
//! │   ├── github     # [github]
//! │   ├── posts      # [posts]
//! │   ├── tags       # [tags]
//! │   ├── projects   # [projects]
//! │   └── experience # [experience]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ThemeConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                          |
//! |----------------|--------------------------------------------------|
//! | `[site]`       | Site metadata (title, author, website, og image) |
//! | `[links]`      | Header/footer navigation and social links        |
//! | `[skills]`     | Skills showcase rows                             |
//! | `[github]`     | GitHub integration toggle and cache settings     |
//! | `[posts]`      | Post pages, card display, frontmatter defaults   |
//! | `[tags]`       | Tags page                                        |
//! | `[projects]`   | Projects page and project list                   |
//! | `[experience]` | Experience page and entries                      |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    Experience, ExperienceConfig, ExperienceKind, GithubConfig, HeroImageAspectRatio,
    HeroImageLayout, IconKind, Link, LinksConfig, PostCardConfig, PostCardType, PostTextConfig,
    PostsConfig, Project, ProjectsConfig, SiteConfig, Skill, SkillGroup, SkillsConfig,
    SlideDirection, SocialLink, TagsConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "theme.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `theme.toml`.
///
/// Every section is optional in the file; omitted sections take the
/// theme's shipped defaults. Loading warns about unknown fields and fails
/// with the full list of validation errors, not just the first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata.
    pub site: SiteConfig,

    /// Navigation and social links.
    pub links: LinksConfig,

    /// Skills showcase.
    pub skills: SkillsConfig,

    /// GitHub integration.
    pub github: GithubConfig,

    /// Post pages and frontmatter defaults.
    pub posts: PostsConfig,

    /// Tags page.
    pub tags: TagsConfig,

    /// Projects page and list.
    pub projects: ProjectsConfig,

    /// Experience page and entries.
    pub experience: ExperienceConfig,
}

impl ThemeConfig {
    /// Load configuration by searching upward from the current directory
    /// for `theme.toml`.
    pub fn discover() -> Result<Self> {
        match find_config_file(Path::new(CONFIG_FILE)) {
            Some(path) => Self::load(&path),
            None => Err(ConfigError::Io(
                PathBuf::from(CONFIG_FILE),
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            )
            .into()),
        }
    }

    /// Load and validate configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;
        config.config_path = path.to_path_buf();

        let diag = config.check();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)?;

        Ok(config)
    }

    /// Parse configuration from TOML string (no validation).
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (theme.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate configuration, returning an error with the full list of
    /// diagnostics if any section is invalid.
    pub fn validate(&self) -> Result<()> {
        let diag = self.check();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section's checks, collecting all diagnostics.
    fn check(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.links.validate(&mut diag);
        self.skills.validate(&mut diag);
        self.github.validate(&mut diag);
        self.posts.validate(&mut diag);
        self.projects.validate(&mut diag);
        self.experience.validate(&mut diag);

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> ThemeConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = ThemeConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<ThemeConfig, _> = toml::from_str("[site\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_theme_config_default() {
        let config = ThemeConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.base, "/");
        assert!(config.github.enable);
        assert_eq!(config.posts.home.size, 5);
        assert!(!config.experience.enable);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content =
            "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = ThemeConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = ThemeConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_collects_across_sections() {
        let config = test_parse_config(
            "website = \"not a url\"\n[posts.home]\nsize = 0\n[github]\ncache_duration = 0",
        );
        let err = config.validate().unwrap_err();
        let display = format!("{err}");
        assert!(display.contains("site.website"));
        assert!(display.contains("posts.home.size"));
        assert!(display.contains("github.cache_duration"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "[site]\ntitle = \"My Blog\"\nauthor = \"Alice\"\nwebsite = \"https://example.com/\"",
        )
        .unwrap();

        let config = ThemeConfig::load(&path).unwrap();
        assert_eq!(config.site.title, "My Blog");
        assert_eq!(config.config_path, path);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert!(ThemeConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_invalid_config_reports_all_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "[site]\nbase = \"blog\"\n[posts.list]\nsize = 0",
        )
        .unwrap();

        let err = ThemeConfig::load(&path).unwrap_err();
        let display = format!("{err}");
        assert!(display.contains("site.base"));
        assert!(display.contains("posts.list.size"));
    }
}
