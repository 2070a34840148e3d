use thiserror::Error;

/// Error for BlogPostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogPostIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Slug validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Slug must not be empty")]
    Empty,

    #[error("Slug too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Slug may only contain lowercase letters, digits, and hyphens")]
    InvalidCharacters,
}

/// Top-level error for all blog-post operations
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    #[error("Invalid blog post ID: {0}")]
    InvalidBlogPostId(#[from] BlogPostIdError),

    #[error("Invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("Blog post not found")]
    NotFound(String),

    #[error("Slug is already in use")]
    SlugAlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}
