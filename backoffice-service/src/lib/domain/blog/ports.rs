use async_trait::async_trait;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogPost;
use crate::domain::blog::models::BlogPostId;
use crate::domain::blog::models::BlogPostSummary;
use crate::domain::blog::models::CreateBlogPostCommand;
use crate::domain::blog::models::Slug;
use crate::domain::blog::models::UpdateBlogPostCommand;

/// Port for blog post domain service operations.
#[async_trait]
pub trait BlogServicePort: Send + Sync + 'static {
    /// List posts, newest first, as summary projections.
    ///
    /// # Arguments
    /// * `published_only` - Restrict to published posts (public consumption)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn list_posts(&self, published_only: bool) -> Result<Vec<BlogPostSummary>, BlogError>;

    /// Retrieve a post by opaque identifier or human slug.
    ///
    /// One combined lookup; either match wins.
    ///
    /// # Errors
    /// * `NotFound` - Neither id nor slug matched
    /// * `Database` - Database operation failed
    async fn get_post(&self, id_or_slug: &str) -> Result<BlogPost, BlogError>;

    /// Create a new post.
    ///
    /// # Errors
    /// * `SlugAlreadyExists` - Slug is already taken
    /// * `Database` - Database operation failed
    async fn create_post(&self, command: CreateBlogPostCommand) -> Result<BlogPost, BlogError>;

    /// Update an existing post with optional fields.
    ///
    /// Slug uniqueness excludes the record's own id; resubmitting the
    /// unchanged slug succeeds.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `SlugAlreadyExists` - Slug belongs to a different post
    /// * `Database` - Database operation failed
    async fn update_post(
        &self,
        id: &BlogPostId,
        command: UpdateBlogPostCommand,
    ) -> Result<BlogPost, BlogError>;

    /// Delete an existing post.
    ///
    /// Pass-through: a miss surfaces as the persistence failure.
    ///
    /// # Errors
    /// * `Database` - Database operation failed or no row matched
    async fn delete_post(&self, id: &BlogPostId) -> Result<(), BlogError>;
}

/// Persistence operations for the blog post aggregate.
#[async_trait]
pub trait BlogPostRepository: Send + Sync + 'static {
    /// Persist new post to storage.
    ///
    /// # Errors
    /// * `Database` - Database operation failed (including a slug race the
    ///   service pre-check did not catch)
    async fn create(&self, post: BlogPost) -> Result<BlogPost, BlogError>;

    /// Retrieve a post matching the raw value as either id or slug.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id_or_slug(&self, id_or_slug: &str) -> Result<Option<BlogPost>, BlogError>;

    /// Retrieve a post by identifier.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: &BlogPostId) -> Result<Option<BlogPost>, BlogError>;

    /// Look up which post, if any, owns a slug.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_id_by_slug(&self, slug: &Slug) -> Result<Option<BlogPostId>, BlogError>;

    /// List posts, newest first.
    ///
    /// # Arguments
    /// * `published_only` - Restrict to published posts
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn list(&self, published_only: bool) -> Result<Vec<BlogPostSummary>, BlogError>;

    /// Update existing post in storage.
    ///
    /// # Errors
    /// * `Database` - Database operation failed or no row matched
    async fn update(&self, post: BlogPost) -> Result<BlogPost, BlogError>;

    /// Remove post from storage.
    ///
    /// # Errors
    /// * `Database` - Database operation failed or no row matched
    async fn delete(&self, id: &BlogPostId) -> Result<(), BlogError>;
}
