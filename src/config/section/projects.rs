//! `[projects]` configuration and project list.
//!
//! # Example
//!
//! ```toml
//! [projects]
//! title = "Projects"
//! description = "The examples of my projects."
//!
//! [[projects.list]]
//! name = "litho"
//! description = "A simple and modern blog theme."
//! github_url = "https://github.com/alice/litho"
//! website = "https://litho.example.com/"
//! kind = "image"
//! icon = "/projects/logo.png"
//! star = 11
//! fork = 4
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// How a project card's icon renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// `icon` is an icon class.
    #[default]
    Icon,
    /// `icon` is an image path.
    Image,
}

/// One project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Live site, if any.
    pub website: Option<String>,
    /// Repository URL, if hosted on GitHub.
    pub github_url: Option<String>,
    /// How `icon` is interpreted.
    pub kind: IconKind,
    /// Icon class or image path, per `kind`.
    pub icon: String,
    /// Extra CSS classes for image icons.
    pub image_class: Option<String>,
    /// Star count shown on the card. Superseded by live data when the
    /// GitHub integration is enabled.
    pub star: Option<u32>,
    /// Fork count shown on the card.
    pub fork: Option<u32>,
    /// Preview image.
    pub thumbnail: Option<String>,
}

/// Projects page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    /// Projects page title.
    pub title: String,
    /// Projects page description.
    pub description: String,
    /// Introductory paragraph shown above the list.
    pub introduce: String,
    /// Project cards, in display order.
    pub list: Vec<Project>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            title: "Projects".into(),
            description: String::new(),
            introduce: String::new(),
            list: Vec::new(),
        }
    }
}

impl ProjectsConfig {
    /// Validate the project list.
    ///
    /// # Checks
    /// - Every project needs a name
    /// - Hand-written star/fork counts without a repository URL get a hint
    ///   (the counts cannot be refreshed)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        const LIST: FieldPath = FieldPath::new("projects.list");

        for (i, project) in self.list.iter().enumerate() {
            if project.name.is_empty() {
                diag.error(LIST, format!("entry {i} is missing a name"));
            }

            if project.github_url.is_none() && (project.star.is_some() || project.fork.is_some()) {
                diag.hint(
                    LIST,
                    format!(
                        "entry {i} (`{}`) has star/fork counts but no github_url; counts will never refresh",
                        project.name
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.projects.title, "Projects");
        assert!(config.projects.list.is_empty());
    }

    #[test]
    fn test_parse_project_entry() {
        let config = test_parse_config(
            r#"[[projects.list]]
name = "litho"
description = "A simple and modern blog theme."
github_url = "https://github.com/alice/litho"
kind = "image"
icon = "/projects/logo.png"
star = 11
fork = 4"#,
        );
        let project = &config.projects.list[0];
        assert_eq!(project.name, "litho");
        assert_eq!(project.kind, IconKind::Image);
        assert_eq!(project.star, Some(11));
        assert_eq!(project.fork, Some(4));
        assert!(project.website.is_none());
    }

    #[test]
    fn test_icon_kind_default() {
        let config = test_parse_config(
            "[[projects.list]]\nname = \"tool\"\nicon = \"icon-[mdi--wrench]\"",
        );
        assert_eq!(config.projects.list[0].kind, IconKind::Icon);
    }

    #[test]
    fn test_validate_missing_name() {
        let config = test_parse_config("[[projects.list]]\ndescription = \"unnamed\"");
        let mut diag = ConfigDiagnostics::new();
        config.projects.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
