//! Post models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Custom deserializer that tells an explicit `null` apart from a missing field
///
/// Missing fields fall back to `None` through `#[serde(default)]`, while a
/// present value (including `null`) is wrapped in `Some`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Post category label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Technology,
    Design,
    Productivity,
    Tutorial,
    Career,
    Learning,
}

impl Category {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Design => "Design",
            Category::Productivity => "Productivity",
            Category::Tutorial => "Tutorial",
            Category::Career => "Career",
            Category::Learning => "Learning",
        }
    }

    /// CSS class used by the rendered pages
    pub fn css_class(&self) -> String {
        format!("category-{}", self.label().to_lowercase())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Sequential identifier
    pub id: u64,

    /// Post title
    pub title: String,

    /// Raw markdown content
    pub content: String,

    /// Short summary shown in listings
    pub excerpt: String,

    pub category: Category,

    /// Featured image URL
    pub featured_image: Option<String>,

    /// Drafts are hidden from the public listing
    pub is_draft: bool,

    /// Creation date
    pub created_at: DateTime<Utc>,

    /// Last updated date
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Build a post from creation input
    ///
    /// Both timestamps are set to `created_at`. An empty featured image is
    /// treated as absent.
    pub fn from_new(id: u64, new: NewPost, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            excerpt: new.excerpt,
            category: new.category,
            featured_image: new.featured_image.filter(|s| !s.is_empty()),
            is_draft: new.is_draft.unwrap_or(false),
            created_at,
            updated_at: created_at,
        }
    }

    /// Merge a partial update onto this post
    ///
    /// Only fields present in the patch are touched; `updated_at` is always
    /// refreshed.
    pub fn apply(&mut self, patch: PostPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(featured_image) = patch.featured_image {
            self.featured_image = featured_image;
        }
        if let Some(is_draft) = patch.is_draft {
            self.is_draft = is_draft;
        }
        self.updated_at = now;
    }
}

/// Input for creating a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: Category,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub is_draft: Option<bool>,
}

/// Partial update for a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<Category>,
    /// `Some(None)` clears the image, `None` leaves it untouched
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<Option<String>>,
    pub is_draft: Option<bool>,
}

impl PostPatch {
    /// Whether the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.excerpt.is_none()
            && self.category.is_none()
            && self.featured_image.is_none()
            && self.is_draft.is_none()
    }
}
