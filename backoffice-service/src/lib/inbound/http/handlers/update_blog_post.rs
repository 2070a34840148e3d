use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::get_blog_post::BlogPostData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogPostId;
use crate::domain::blog::models::Slug;
use crate::domain::blog::models::UpdateBlogPostCommand;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_blog_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateBlogPostRequest>,
) -> Result<ApiSuccess<BlogPostData>, ApiError> {
    let post_id = BlogPostId::from_string(&id).map_err(BlogError::from)?;
    let command = req.try_into_command()?;

    state
        .blog_service
        .update_post(&post_id, command)
        .await
        .map_err(|e| ApiError::from(e).with_internal_message("Failed to update blog post"))
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}

/// HTTP request body for updating a blog post (raw JSON).
///
/// Every field is optional; a field that is absent or null leaves the
/// stored value untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
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

impl UpdateBlogPostRequest {
    fn try_into_command(self) -> Result<UpdateBlogPostCommand, BlogError> {
        let slug = self.slug.map(Slug::new).transpose()?;

        Ok(UpdateBlogPostCommand {
            title: self.title,
            slug,
            content: self.content,
            author_name: self.author_name,
            excerpt: self.excerpt,
            featured_image: self.featured_image,
            category: self.category,
            seo_title: self.seo_title,
            seo_description: self.seo_description,
            reading_time: self.reading_time,
            is_published: self.is_published,
            published_at: self.published_at,
        })
    }
}
