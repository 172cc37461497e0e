//! Configuration section definitions.
//!
//! Each module corresponds to a section in `theme.toml`:
//!
//! | Module       | TOML Section   | Purpose                              |
//! |--------------|----------------|--------------------------------------|
//! | `site`       | `[site]`       | Site metadata (title, author, url)   |
//! | `links`      | `[links]`      | Header/footer navigation, socials    |
//! | `skills`     | `[skills]`     | Skills showcase rows                 |
//! | `github`     | `[github]`     | GitHub integration toggle            |
//! | `posts`      | `[posts]`      | Post pages and card display settings |
//! | `tags`       | `[tags]`       | Tags page                            |
//! | `projects`   | `[projects]`   | Projects page and project list       |
//! | `experience` | `[experience]` | Experience page and entries          |

mod experience;
mod github;
mod links;
mod posts;
mod projects;
mod site;
mod skills;
mod tags;

pub use experience::{Experience, ExperienceConfig, ExperienceKind};
pub use github::GithubConfig;
pub use links::{Link, LinksConfig, SocialLink};
pub use posts::{
    HeroImageAspectRatio, HeroImageLayout, PostCardConfig, PostCardType, PostTextConfig,
    PostsConfig,
};
pub use projects::{IconKind, Project, ProjectsConfig};
pub use site::SiteConfig;
pub use skills::{Skill, SkillGroup, SkillsConfig, SlideDirection};
pub use tags::TagsConfig;
