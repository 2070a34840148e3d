use std::sync::Arc;
use std::time::Duration;

use auth::JwtHandler;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_blog_post::create_blog_post;
use super::handlers::create_user::create_user;
use super::handlers::delete_blog_post::delete_blog_post;
use super::handlers::delete_user::delete_user;
use super::handlers::get_blog_post::get_blog_post;
use super::handlers::list_blog_posts::list_blog_posts;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::update_blog_post::update_blog_post;
use super::handlers::update_user::update_user;
use super::handlers::ApiSuccess;
use super::middleware::require_admin;
use super::middleware::require_auth;
use crate::domain::blog::service::BlogService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::blog_post::PostgresBlogPostRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub blog_service: Arc<BlogService<PostgresBlogPostRepository>>,
    pub jwt_handler: Arc<JwtHandler>,
    pub jwt_expiration_hours: i64,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    blog_service: Arc<BlogService<PostgresBlogPostRepository>>,
    jwt_handler: Arc<JwtHandler>,
    jwt_expiration_hours: i64,
) -> Router {
    let state = AppState {
        user_service,
        blog_service,
        jwt_handler,
        jwt_expiration_hours,
    };

    let public_routes = Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/blogs", get(list_blog_posts))
        .route("/api/v1/blogs/:id", get(get_blog_post));

    // Gate ordering: layers run outermost-first, so require_auth (added
    // last) resolves the principal before require_admin inspects it.
    let admin_routes = Router::new()
        .route("/api/v1/users", get(list_users).post(create_user))
        .route("/api/v1/users/:id", put(update_user).delete(delete_user))
        .route("/api/v1/blogs", post(create_blog_post))
        .route(
            "/api/v1/blogs/:id",
            put(update_blog_post).delete(delete_blog_post),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/", get(health))
        .merge(public_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> ApiSuccess<()> {
    ApiSuccess::with_message(StatusCode::OK, "API is running securely.")
}
