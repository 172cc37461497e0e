//! The validated representation of one post's metadata.

use crate::config::{HeroImageAspectRatio, HeroImageLayout};
use crate::utils::DateTimeUtc;
use serde::Serialize;

/// One blog post's validated metadata.
///
/// Built once per post at content-discovery time by
/// [`PostSchema::validate`](super::PostSchema::validate) and immutable
/// thereafter. Image paths are already normalized: either an absolute URL
/// or a site-rooted asset path.
///
/// | Field                    | Source frontmatter key | Default            |
/// |--------------------------|------------------------|--------------------|
/// | `title`                  | `title`                | required           |
/// | `description`            | `description`          | required           |
/// | `publish_date`           | `pubDate`              | required           |
/// | `updated_date`           | `updatedDate`          | absent             |
/// | `recommend`              | `recommend`            | `false`            |
/// | `author`                 | `author`               | `[posts].author`   |
/// | `hero_image`             | `heroImage`            | absent             |
/// | `og_image`               | `ogImage`              | absent             |
/// | `hero_image_layout`      | `heroImageLayout`      | absent             |
/// | `hero_image_aspect_ratio`| `heroImageAspectRatio` | `[posts]` default  |
/// | `tags`                   | `tags`                 | required           |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDescriptor {
    pub title: String,
    pub description: String,
    pub publish_date: DateTimeUtc,
    pub updated_date: Option<DateTimeUtc>,
    pub recommend: bool,
    pub author: String,
    pub hero_image: Option<String>,
    pub og_image: Option<String>,
    pub hero_image_layout: Option<HeroImageLayout>,
    pub hero_image_aspect_ratio: HeroImageAspectRatio,
    /// Tags in frontmatter order; may be empty.
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_serializes_for_templates() {
        let descriptor = PostDescriptor {
            title: "Hello".into(),
            description: String::new(),
            publish_date: DateTimeUtc::from_ymd(2024, 1, 1),
            updated_date: None,
            recommend: false,
            author: "Alice".into(),
            hero_image: Some("/hero-images/cover.png".into()),
            og_image: None,
            hero_image_layout: Some(HeroImageLayout::Left),
            hero_image_aspect_ratio: HeroImageAspectRatio::Wide,
            tags: vec!["rust".into()],
        };

        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["publish_date"], "2024-01-01T00:00:00Z");
        assert_eq!(json["hero_image_layout"], "left");
        assert_eq!(json["hero_image_aspect_ratio"], "16/9");
        assert_eq!(json["og_image"], serde_json::Value::Null);
    }
}
