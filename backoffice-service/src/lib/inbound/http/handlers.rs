use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::blog::errors::BlogError;
use crate::domain::user::errors::UserError;

pub mod create_blog_post;
pub mod create_user;
pub mod delete_blog_post;
pub mod delete_user;
pub mod get_blog_post;
pub mod list_blog_posts;
pub mod list_users;
pub mod login;
pub mod update_blog_post;
pub mod update_user;

/// Successful response wrapper: a status code plus the uniform envelope.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<ApiResponseBody<T>>);

impl<T: Serialize> ApiSuccess<T> {
    /// Envelope carrying a data payload: `{"status":"success","data":...}`.
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(data)))
    }
}

impl ApiSuccess<()> {
    /// Envelope carrying only a message, used by deletes and the health
    /// probe: `{"status":"success","message":"..."}`.
    pub fn with_message(status: StatusCode, message: &str) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new_message(message)))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failure taxonomy shared by handlers and the access gate.
///
/// Every variant renders as `{"status":"error","message":"..."}` with the
/// matching status code; nothing propagates past the handler layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    InternalServerError(String),
}

impl ApiError {
    /// Substitute the client-facing message on internal errors.
    ///
    /// The original detail is logged here and never reaches the client;
    /// other variants already carry safe messages and pass unchanged.
    pub fn with_internal_message(self, message: &str) -> Self {
        match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(detail = %detail, "internal error");
                ApiError::InternalServerError(message.to_string())
            }
            other => other,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ApiResponseBody::new_error(message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::AdminOnly => ApiError::Forbidden(err.to_string()),
            UserError::InvalidUserId(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidRole(_) => ApiError::BadRequest(err.to_string()),
            UserError::Password(_) | UserError::Database(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BlogError::SlugAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            BlogError::InvalidBlogPostId(_) | BlogError::InvalidSlug(_) => {
                ApiError::BadRequest(err.to_string())
            }
            BlogError::Database(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Uniform JSON envelope for every response the service emits.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponseBody<T: Serialize> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<T: Serialize> ApiResponseBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponseBody<()> {
    pub fn new_message(message: &str) -> Self {
        Self {
            status: "success",
            data: None,
            message: Some(message.to_string()),
        }
    }

    pub fn new_error(message: String) -> Self {
        Self {
            status: "error",
            data: None,
            message: Some(message),
        }
    }
}
