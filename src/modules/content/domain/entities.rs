use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// The API serializes optional URL fields as empty strings. Normalize those
/// to `None` so callers can match on presence instead of trimming everywhere.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub short_desc: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub live_url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub short_desc: String,
    pub category: String,
    pub read_time: String,
    pub date: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Images for the gallery and lightbox. Falls back to the single cover
    /// image when the post has no dedicated image list, and to nothing at
    /// all when neither is set.
    pub fn gallery_images(&self) -> Vec<String> {
        if !self.images.is_empty() {
            return self.images.clone();
        }
        if self.image_url.trim().is_empty() {
            Vec::new()
        } else {
            vec![self.image_url.clone()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_json(live_url: &str) -> String {
        format!(
            r#"{{
                "id": "7f1a2b3c-4d5e-6f70-8192-a3b4c5d6e7f8",
                "title": "Inventory Tracker",
                "slug": "inventory-tracker",
                "short_desc": "Realtime stock dashboard",
                "description": "Full build with barcode intake.",
                "tech_stack": ["React", "Django"],
                "image_url": "https://cdn.example.com/inventory.png",
                "live_url": "{live_url}",
                "github_url": "https://github.com/example/inventory",
                "category": "fullstack",
                "created_at": "2025-03-01T09:30:00Z",
                "updated_at": "2025-03-02T11:00:00Z"
            }}"#
        )
    }

    #[test]
    fn project_deserializes_from_api_payload() {
        let project: Project =
            serde_json::from_str(&project_json("https://inventory.example.com")).unwrap();

        assert_eq!(project.slug, "inventory-tracker");
        assert_eq!(project.tech_stack, vec!["React", "Django"]);
        assert_eq!(
            project.live_url.as_deref(),
            Some("https://inventory.example.com")
        );
    }

    #[test]
    fn blank_live_url_normalizes_to_none() {
        let project: Project = serde_json::from_str(&project_json("")).unwrap();
        assert!(project.live_url.is_none());
        assert!(project.github_url.is_some());
    }

    fn blog_post(images: Vec<&str>, image_url: &str) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            title: "Shipping a Flutter app".to_string(),
            slug: "shipping-a-flutter-app".to_string(),
            short_desc: "Notes from a release week".to_string(),
            category: "Mobile".to_string(),
            read_time: "6 min".to_string(),
            date: "May 2025".to_string(),
            image_url: image_url.to_string(),
            images: images.into_iter().map(str::to_string).collect(),
            story: "Long form story".to_string(),
            highlights: vec!["Store review in 2 days".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn gallery_prefers_the_image_list() {
        let post = blog_post(vec!["a.png", "b.png"], "cover.png");
        assert_eq!(post.gallery_images(), vec!["a.png", "b.png"]);
    }

    #[test]
    fn gallery_falls_back_to_the_cover_image() {
        let post = blog_post(vec![], "cover.png");
        assert_eq!(post.gallery_images(), vec!["cover.png"]);
    }

    #[test]
    fn gallery_is_empty_when_the_post_has_no_images_at_all() {
        let post = blog_post(vec![], "  ");
        assert!(post.gallery_images().is_empty());
    }
}
