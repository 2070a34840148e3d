use std::sync::Arc;

use auth::JwtHandler;
use backoffice_service::config::Config;
use backoffice_service::domain::blog::service::BlogService;
use backoffice_service::domain::user::service::UserService;
use backoffice_service::inbound::http::router::create_router;
use backoffice_service::outbound::repositories::PostgresBlogPostRepository;
use backoffice_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backoffice_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "backoffice-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Fails here, before anything listens, when the signing secret is
    // missing or empty.
    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let jwt_handler = Arc::new(JwtHandler::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let blog_repository = Arc::new(PostgresBlogPostRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(user_repository));
    let blog_service = Arc::new(BlogService::new(blog_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(
        user_service,
        blog_service,
        jwt_handler,
        config.jwt.expiration_hours,
    );
    axum::serve(http_listener, application).await?;

    Ok(())
}
