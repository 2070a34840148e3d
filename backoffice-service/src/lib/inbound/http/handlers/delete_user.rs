use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;

    // Unvalidated pass-through: a missing id surfaces as the persistence
    // failure, not as a 404.
    state
        .user_service
        .delete_user(&user_id)
        .await
        .map_err(|e| ApiError::from(e).with_internal_message("Failed to delete user"))
        .map(|_| ApiSuccess::with_message(StatusCode::OK, "User deleted successfully"))
}
