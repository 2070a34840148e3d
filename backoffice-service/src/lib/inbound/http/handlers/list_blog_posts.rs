use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::blog::models::BlogPostSummary;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_blog_posts(
    State(state): State<AppState>,
    Query(params): Query<ListBlogPostsParams>,
) -> Result<ApiSuccess<Vec<BlogPostSummaryData>>, ApiError> {
    state
        .blog_service
        .list_posts(params.published_only)
        .await
        .map_err(|e| ApiError::from(e).with_internal_message("Failed to fetch blog posts"))
        .map(|posts| {
            ApiSuccess::new(
                StatusCode::OK,
                posts.iter().map(BlogPostSummaryData::from).collect(),
            )
        })
}

/// Query parameters for the list endpoint.
///
/// The public site passes `publishedOnly=true`; the admin dashboard omits
/// it and sees drafts as well.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBlogPostsParams {
    #[serde(default)]
    pub published_only: bool,
}

/// List projection; the rich-text content body is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostSummaryData {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub author_name: String,
    pub category: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub reading_time: Option<i32>,
}

impl From<&BlogPostSummary> for BlogPostSummaryData {
    fn from(post: &BlogPostSummary) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            slug: post.slug.to_string(),
            excerpt: post.excerpt.clone(),
            featured_image: post.featured_image.clone(),
            author_name: post.author_name.clone(),
            category: post.category.clone(),
            is_published: post.is_published,
            published_at: post.published_at,
            reading_time: post.reading_time,
        }
    }
}
