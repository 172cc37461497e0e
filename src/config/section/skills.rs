//! `[skills]` configuration for the skills showcase.
//!
//! Skills render as horizontally scrolling rows; each group slides either
//! left or right.
//!
//! # Example
//!
//! ```toml
//! [skills]
//! enable = true
//!
//! [[skills.groups]]
//! direction = "left"
//! skills = [
//!     { name = "Rust", icon = "icon-[mdi--language-rust]" },
//!     { name = "CSS", icon = "icon-[mdi--language-css3]" },
//! ]
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// One skill entry: a name and its icon class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Icon class (iconify).
    pub icon: String,
}

/// Scroll direction of a showcase row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    #[default]
    Left,
    Right,
}

/// A row of skills sliding in one direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub direction: SlideDirection,
    pub skills: Vec<Skill>,
}

/// Skills showcase configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Enable the showcase section.
    pub enable: bool,
    /// Showcase rows, in display order.
    pub groups: Vec<SkillGroup>,
}

impl SkillsConfig {
    /// Validate the showcase.
    ///
    /// # Checks
    /// - An enabled showcase needs at least one non-empty group
    /// - Every skill needs a name and an icon
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        const GROUPS: FieldPath = FieldPath::new("skills.groups");

        if self.enable && self.groups.iter().all(|g| g.skills.is_empty()) {
            diag.error_with_hint(
                GROUPS,
                "showcase is enabled but no group has any skills",
                "add [[skills.groups]] entries or set skills.enable = false",
            );
        }

        for (gi, group) in self.groups.iter().enumerate() {
            for (si, skill) in group.skills.iter().enumerate() {
                if skill.name.is_empty() || skill.icon.is_empty() {
                    diag.error(
                        GROUPS,
                        format!("group {gi} skill {si} is missing a name or icon"),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults_disabled() {
        let config = test_parse_config("");
        assert!(!config.skills.enable);
        assert!(config.skills.groups.is_empty());
    }

    #[test]
    fn test_parse_groups() {
        let config = test_parse_config(
            r#"[skills]
enable = true

[[skills.groups]]
direction = "left"
skills = [{ name = "Rust", icon = "icon-[mdi--language-rust]" }]

[[skills.groups]]
direction = "right"
skills = [{ name = "Git", icon = "icon-[mdi--git]" }]"#,
        );
        assert!(config.skills.enable);
        assert_eq!(config.skills.groups.len(), 2);
        assert_eq!(config.skills.groups[0].direction, SlideDirection::Left);
        assert_eq!(config.skills.groups[1].direction, SlideDirection::Right);
        assert_eq!(config.skills.groups[0].skills[0].name, "Rust");

        let mut diag = ConfigDiagnostics::new();
        config.skills.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_enabled_but_empty() {
        let config = test_parse_config("[skills]\nenable = true");
        let mut diag = ConfigDiagnostics::new();
        config.skills.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_validate_skill_missing_icon() {
        let config = test_parse_config(
            "[[skills.groups]]\nskills = [{ name = \"Rust\" }]",
        );
        let mut diag = ConfigDiagnostics::new();
        config.skills.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
