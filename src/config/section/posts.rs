//! `[posts]` configuration.
//!
//! Post listing pages, card display settings, and the defaults the post
//! frontmatter schema falls back to (author, hero image, aspect ratio).
//!
//! # Example
//!
//! ```toml
//! [posts]
//! title = "Posts"
//! description = "Posts by Alice"
//! introduce = "Notes on things I build."
//! author = "Alice"
//! default_hero_image = "/og-image.jpg"
//! default_hero_image_aspect_ratio = "16/9"
//! image_darken_in_dark = true
//!
//! [posts.home]
//! size = 5
//! kind = "compact"
//!
//! [posts.list]
//! size = 10
//! kind = "image"
//!
//! [posts.by_tag]
//! size = 10
//! kind = "time-line"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

// ============================================================================
// display enums
// ============================================================================

/// How a post card renders in a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostCardType {
    /// Title and date only.
    #[default]
    Compact,
    /// Card with hero image.
    Image,
    /// Chronological timeline entry.
    TimeLine,
}

/// Which side of a card the hero image sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroImageLayout {
    Left,
    Right,
}

impl HeroImageLayout {
    /// Accepted frontmatter spellings, used in diagnostics.
    pub const ALLOWED: &'static [&'static str] = &["left", "right"];

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Hero image aspect ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroImageAspectRatio {
    #[default]
    #[serde(rename = "16/9")]
    Wide,
    #[serde(rename = "3/4")]
    Portrait,
}

impl HeroImageAspectRatio {
    /// Accepted frontmatter spellings, used in diagnostics.
    pub const ALLOWED: &'static [&'static str] = &["16/9", "3/4"];

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "16/9" => Some(Self::Wide),
            "3/4" => Some(Self::Portrait),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wide => "16/9",
            Self::Portrait => "3/4",
        }
    }
}

// ============================================================================
// card page settings
// ============================================================================

/// Card display settings for one listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostCardConfig {
    /// Number of posts per page.
    pub size: u32,
    /// Card rendering style.
    pub kind: PostCardType,
    /// Hero image side, for card kinds that show one.
    pub hero_image_layout: Option<HeroImageLayout>,
}

impl Default for PostCardConfig {
    fn default() -> Self {
        Self {
            size: 10,
            kind: PostCardType::Compact,
            hero_image_layout: None,
        }
    }
}

// ============================================================================
// UI strings
// ============================================================================

/// Localizable UI strings for post pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostTextConfig {
    pub read_more: String,
    pub prev_page: String,
    pub next_page: String,
    pub toc: String,
    pub back_to_posts: String,
    pub next_post: String,
    pub prev_post: String,
}

impl Default for PostTextConfig {
    fn default() -> Self {
        Self {
            read_more: "Read more".into(),
            prev_page: "Previous".into(),
            next_page: "Next".into(),
            toc: "Catalogue".into(),
            back_to_posts: "Back to Posts".into(),
            next_post: "Next Post".into(),
            prev_post: "Previous Post".into(),
        }
    }
}

// ============================================================================
// [posts]
// ============================================================================

/// Post pages configuration.
///
/// `author` and `default_hero_image_aspect_ratio` double as the frontmatter
/// schema's defaults; see `content::PostSchema`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    /// Posts page title.
    pub title: String,

    /// Posts page description.
    pub description: String,

    /// Introductory paragraph shown above the list.
    pub introduce: String,

    /// Default post author, applied when frontmatter omits `author`.
    pub author: String,

    /// Card settings for the home page list.
    pub home: PostCardConfig,

    /// Card settings for the full posts list.
    pub list: PostCardConfig,

    /// Card settings for per-tag listings.
    pub by_tag: PostCardConfig,

    /// Hero image used when a post has none.
    pub default_hero_image: String,

    /// Aspect ratio applied when frontmatter omits `heroImageAspectRatio`.
    pub default_hero_image_aspect_ratio: HeroImageAspectRatio,

    /// Darken hero images in dark mode.
    pub image_darken_in_dark: bool,

    /// UI strings.
    pub text: PostTextConfig,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            title: "Posts".into(),
            description: String::new(),
            introduce: String::new(),
            author: String::new(),
            home: PostCardConfig {
                size: 5,
                kind: PostCardType::Compact,
                hero_image_layout: None,
            },
            list: PostCardConfig {
                size: 10,
                kind: PostCardType::Image,
                hero_image_layout: None,
            },
            by_tag: PostCardConfig {
                size: 10,
                kind: PostCardType::TimeLine,
                hero_image_layout: None,
            },
            default_hero_image: "/og-image.jpg".into(),
            default_hero_image_aspect_ratio: HeroImageAspectRatio::Wide,
            image_darken_in_dark: true,
            text: PostTextConfig::default(),
        }
    }
}

impl PostsConfig {
    /// Validate post page settings.
    ///
    /// # Checks
    /// - Every listing page size must be non-zero
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (card, field) in [
            (&self.home, FieldPath::new("posts.home.size")),
            (&self.list, FieldPath::new("posts.list.size")),
            (&self.by_tag, FieldPath::new("posts.by_tag.size")),
        ] {
            if card.size == 0 {
                diag.error_with_hint(
                    field,
                    "page size must be non-zero",
                    "a zero-sized page would render no posts",
                );
            }
        }
    }
}
