use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use super::get_blog_post::BlogPostData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::blog::errors::SlugError;
use crate::domain::blog::models::CreateBlogPostCommand;
use crate::domain::blog::models::Slug;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_blog_post(
    State(state): State<AppState>,
    Json(body): Json<CreateBlogPostRequest>,
) -> Result<ApiSuccess<BlogPostData>, ApiError> {
    state
        .blog_service
        .create_post(body.try_into_command()?)
        .await
        .map_err(|e| ApiError::from(e).with_internal_message("Failed to create blog post"))
        .map(|ref post| ApiSuccess::new(StatusCode::CREATED, post.into()))
}

/// HTTP request body for creating a blog post (raw JSON)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    title: Option<String>,
    slug: Option<String>,
    content: Option<String>,
    author_name: Option<String>,
    excerpt: Option<String>,
    featured_image: Option<String>,
    category: Option<String>,
    seo_title: Option<String>,
    seo_description: Option<String>,
    reading_time: Option<i32>,
    #[serde(default)]
    is_published: bool,
    published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateBlogPostRequestError {
    #[error("Title, slug, content, and author are required")]
    MissingFields,

    #[error("Invalid slug: {0}")]
    Slug(#[from] SlugError),
}

impl CreateBlogPostRequest {
    fn try_into_command(self) -> Result<CreateBlogPostCommand, ParseCreateBlogPostRequestError> {
        let (Some(title), Some(slug), Some(content), Some(author_name)) =
            (self.title, self.slug, self.content, self.author_name)
        else {
            return Err(ParseCreateBlogPostRequestError::MissingFields);
        };
        if title.is_empty() || slug.is_empty() || content.is_empty() || author_name.is_empty() {
            return Err(ParseCreateBlogPostRequestError::MissingFields);
        }

        let slug = Slug::new(slug)?;

        Ok(CreateBlogPostCommand {
            title,
            slug,
            content,
            author_name,
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

impl From<ParseCreateBlogPostRequestError> for ApiError {
    fn from(err: ParseCreateBlogPostRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
