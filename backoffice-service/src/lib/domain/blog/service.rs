use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogPost;
use crate::domain::blog::models::BlogPostId;
use crate::domain::blog::models::BlogPostSummary;
use crate::domain::blog::models::CreateBlogPostCommand;
use crate::domain::blog::models::UpdateBlogPostCommand;
use crate::domain::blog::ports::BlogPostRepository;
use crate::domain::blog::ports::BlogServicePort;

/// Domain service implementation for blog post operations.
pub struct BlogService<BR>
where
    BR: BlogPostRepository,
{
    repository: Arc<BR>,
}

impl<BR> BlogService<BR>
where
    BR: BlogPostRepository,
{
    /// Create a new blog service with an injected repository.
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BlogServicePort for BlogService<BR>
where
    BR: BlogPostRepository,
{
    async fn list_posts(&self, published_only: bool) -> Result<Vec<BlogPostSummary>, BlogError> {
        self.repository.list(published_only).await
    }

    async fn get_post(&self, id_or_slug: &str) -> Result<BlogPost, BlogError> {
        self.repository
            .find_by_id_or_slug(id_or_slug)
            .await?
            .ok_or_else(|| BlogError::NotFound(id_or_slug.to_string()))
    }

    async fn create_post(&self, command: CreateBlogPostCommand) -> Result<BlogPost, BlogError> {
        // Uniqueness pre-check; a concurrent insert still trips the
        // database constraint and surfaces as a Database error.
        if self
            .repository
            .find_id_by_slug(&command.slug)
            .await?
            .is_some()
        {
            return Err(BlogError::SlugAlreadyExists(command.slug.to_string()));
        }

        let now = Utc::now();
        // Publishing without an explicit timestamp stamps now.
        let published_at = match (command.is_published, command.published_at) {
            (true, None) => Some(now),
            (_, explicit) => explicit,
        };

        let post = BlogPost {
            id: BlogPostId::new(),
            title: command.title,
            slug: command.slug,
            content: command.content,
            excerpt: command.excerpt,
            featured_image: command.featured_image,
            author_name: command.author_name,
            category: command.category,
            seo_title: command.seo_title,
            seo_description: command.seo_description,
            reading_time: command.reading_time,
            is_published: command.is_published,
            published_at,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(post).await
    }

    async fn update_post(
        &self,
        id: &BlogPostId,
        command: UpdateBlogPostCommand,
    ) -> Result<BlogPost, BlogError> {
        let mut post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| BlogError::NotFound(id.to_string()))?;

        // Uniqueness check excludes the record's own id so resubmitting the
        // unchanged slug succeeds.
        if let Some(slug) = &command.slug {
            if let Some(owner) = self.repository.find_id_by_slug(slug).await? {
                if owner != post.id {
                    return Err(BlogError::SlugAlreadyExists(slug.to_string()));
                }
            }
        }

        if let Some(title) = command.title {
            post.title = title;
        }
        if let Some(slug) = command.slug {
            post.slug = slug;
        }
        if let Some(content) = command.content {
            post.content = content;
        }
        if let Some(author_name) = command.author_name {
            post.author_name = author_name;
        }
        if let Some(excerpt) = command.excerpt {
            post.excerpt = Some(excerpt);
        }
        if let Some(featured_image) = command.featured_image {
            post.featured_image = Some(featured_image);
        }
        if let Some(category) = command.category {
            post.category = Some(category);
        }
        if let Some(seo_title) = command.seo_title {
            post.seo_title = Some(seo_title);
        }
        if let Some(seo_description) = command.seo_description {
            post.seo_description = Some(seo_description);
        }
        if let Some(reading_time) = command.reading_time {
            post.reading_time = Some(reading_time);
        }
        if let Some(is_published) = command.is_published {
            post.is_published = is_published;
        }
        if let Some(published_at) = command.published_at {
            post.published_at = Some(published_at);
        }

        // First publish without an explicit timestamp stamps now.
        if post.is_published && post.published_at.is_none() {
            post.published_at = Some(Utc::now());
        }

        self.repository.update(post).await
    }

    async fn delete_post(&self, id: &BlogPostId) -> Result<(), BlogError> {
        self.repository.delete(id).await
    }
}
