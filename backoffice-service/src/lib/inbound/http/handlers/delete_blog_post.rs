use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogPostId;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_blog_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let post_id = BlogPostId::from_string(&id).map_err(BlogError::from)?;

    // Pass-through delete: a missing id surfaces as the persistence
    // failure, not as a 404.
    state
        .blog_service
        .delete_post(&post_id)
        .await
        .map_err(|e| ApiError::from(e).with_internal_message("Failed to delete blog post"))
        .map(|_| ApiSuccess::with_message(StatusCode::OK, "Blog post deleted successfully"))
}
