use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::blog::errors::BlogPostIdError;
use crate::domain::blog::errors::SlugError;

/// Blog post aggregate entity.
#[derive(Debug, Clone)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub slug: Slug,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub author_name: String,
    pub category: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub reading_time: Option<i32>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List projection of a blog post.
///
/// Everything the admin table and the public index need, without dragging
/// the rich-text `content` body through every list query.
#[derive(Debug, Clone)]
pub struct BlogPostSummary {
    pub id: BlogPostId,
    pub title: String,
    pub slug: Slug,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub author_name: String,
    pub category: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub reading_time: Option<i32>,
}

/// Blog post unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogPostId(pub Uuid);

impl BlogPostId {
    /// Generate a new random blog post ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a blog post ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BlogPostIdError> {
        Uuid::parse_str(s)
            .map(BlogPostId)
            .map_err(|e| BlogPostIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BlogPostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlogPostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Human-readable URL slug value type.
///
/// Lowercase letters, digits, and hyphens, 1 to 200 characters. Globally
/// unique per post; uniqueness is enforced at write time by the service
/// and backed by a database constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    const MAX_LENGTH: usize = 200;

    /// Create a new validated slug.
    ///
    /// # Errors
    /// * `Empty` - Slug is empty
    /// * `TooLong` - Slug longer than 200 characters
    /// * `InvalidCharacters` - Anything outside lowercase alphanumerics and hyphens
    pub fn new(slug: String) -> Result<Self, SlugError> {
        if slug.is_empty() {
            return Err(SlugError::Empty);
        }
        if slug.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
                actual: slug.len(),
            });
        }
        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SlugError::InvalidCharacters);
        }
        Ok(Self(slug))
    }

    /// Get slug as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new blog post with domain types
#[derive(Debug)]
pub struct CreateBlogPostCommand {
    pub title: String,
    pub slug: Slug,
    pub content: String,
    pub author_name: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub category: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub reading_time: Option<i32>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Command to update an existing blog post.
///
/// Every field is optional: a present value overrides, an absent field is
/// untouched.
#[derive(Debug, Default)]
pub struct UpdateBlogPostCommand {
    pub title: Option<String>,
    pub slug: Option<Slug>,
    pub content: Option<String>,
    pub author_name: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub category: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub reading_time: Option<i32>,
    pub is_published: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_accepts_kebab_case() {
        assert!(Slug::new("kilimanjaro-trek-2026".to_string()).is_ok());
    }

    #[test]
    fn test_slug_rejects_invalid() {
        assert!(matches!(Slug::new(String::new()), Err(SlugError::Empty)));
        assert!(matches!(
            Slug::new("Has Spaces".to_string()),
            Err(SlugError::InvalidCharacters)
        ));
        assert!(matches!(
            Slug::new("UPPER".to_string()),
            Err(SlugError::InvalidCharacters)
        ));
        assert!(matches!(
            Slug::new("x".repeat(201)),
            Err(SlugError::TooLong { .. })
        ));
    }
}
