use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::blog::models::BlogPost;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::router::AppState;

/// Public single-post read; the path value may be the opaque id or the
/// human slug, resolved in one combined lookup.
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> Result<ApiSuccess<BlogPostData>, ApiError> {
    state
        .blog_service
        .get_post(&id_or_slug)
        .await
        .map_err(|e| ApiError::from(e).with_internal_message("Failed to fetch blog post"))
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}

/// Full blog post projection, content included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostData {
    pub id: String,
    pub title: String,
    pub slug: String,
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

impl From<&BlogPost> for BlogPostData {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            slug: post.slug.to_string(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            featured_image: post.featured_image.clone(),
            author_name: post.author_name.clone(),
            category: post.category.clone(),
            seo_title: post.seo_title.clone(),
            seo_description: post.seo_description.clone(),
            reading_time: post.reading_time,
            is_published: post.is_published,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
