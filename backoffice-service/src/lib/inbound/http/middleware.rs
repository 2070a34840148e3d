use std::str::FromStr;

use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Resolved identity of an authenticated request, stored in request
/// extensions by [`require_auth`] for everything downstream.
///
/// The role is the issuance-time snapshot carried by the token; it is not
/// re-read from storage per request.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: UserId,
    pub role: Role,
}

/// Authentication check: first stage of the access gate.
///
/// Requires `Authorization: Bearer <token>`. A missing or non-Bearer
/// header rejects before any token work; a present token is verified
/// against the process-wide signing key. All verification failures
/// (signature, format, expiry) collapse into one response.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req)?;

    let claims = state.jwt_handler.decode(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    let id = UserId::from_string(&claims.sub)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;
    let role = Role::from_str(&claims.role)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    req.extensions_mut().insert(Principal { id, role });

    Ok(next.run(req).await)
}

/// Authorization check: second stage of the access gate.
///
/// Reads the principal attached by [`require_auth`] and requires the ADMIN
/// role. Never inspects the token itself; if no principal is present the
/// authentication stage did not run and the request is treated as
/// unauthenticated.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApiError> {
    match req.extensions().get::<Principal>() {
        Some(principal) if principal.role == Role::Admin => Ok(next.run(req).await),
        Some(_) => Err(ApiError::Forbidden("Admin access required".to_string())),
        None => Err(ApiError::Unauthorized("No token provided".to_string())),
    }
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("No token provided".to_string()))
}
