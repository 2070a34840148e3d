pub mod blog_post;
pub mod user;

pub use blog_post::PostgresBlogPostRepository;
pub use user::PostgresUserRepository;
