use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogPost;
use crate::domain::blog::models::BlogPostId;
use crate::domain::blog::models::BlogPostSummary;
use crate::domain::blog::models::Slug;
use crate::domain::blog::ports::BlogPostRepository;

pub struct PostgresBlogPostRepository {
    pool: PgPool,
}

impl PostgresBlogPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BlogPostRow {
    id: Uuid,
    title: String,
    slug: String,
    content: String,
    excerpt: Option<String>,
    featured_image: Option<String>,
    author_name: String,
    category: Option<String>,
    seo_title: Option<String>,
    seo_description: Option<String>,
    reading_time: Option<i32>,
    is_published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BlogPostRow> for BlogPost {
    type Error = BlogError;

    fn try_from(row: BlogPostRow) -> Result<Self, Self::Error> {
        Ok(BlogPost {
            id: BlogPostId(row.id),
            title: row.title,
            slug: Slug::new(row.slug)?,
            content: row.content,
            excerpt: row.excerpt,
            featured_image: row.featured_image,
            author_name: row.author_name,
            category: row.category,
            seo_title: row.seo_title,
            seo_description: row.seo_description,
            reading_time: row.reading_time,
            is_published: row.is_published,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct BlogPostSummaryRow {
    id: Uuid,
    title: String,
    slug: String,
    excerpt: Option<String>,
    featured_image: Option<String>,
    author_name: String,
    category: Option<String>,
    is_published: bool,
    published_at: Option<DateTime<Utc>>,
    reading_time: Option<i32>,
}

impl TryFrom<BlogPostSummaryRow> for BlogPostSummary {
    type Error = BlogError;

    fn try_from(row: BlogPostSummaryRow) -> Result<Self, Self::Error> {
        Ok(BlogPostSummary {
            id: BlogPostId(row.id),
            title: row.title,
            slug: Slug::new(row.slug)?,
            excerpt: row.excerpt,
            featured_image: row.featured_image,
            author_name: row.author_name,
            category: row.category,
            is_published: row.is_published,
            published_at: row.published_at,
            reading_time: row.reading_time,
        })
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn create(&self, post: BlogPost) -> Result<BlogPost, BlogError> {
        sqlx::query(
            r#"
            INSERT INTO blog_posts (id, title, slug, content, excerpt, featured_image,
                                    author_name, category, seo_title, seo_description,
                                    reading_time, is_published, published_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(post.id.0)
        .bind(&post.title)
        .bind(post.slug.as_str())
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.featured_image)
        .bind(&post.author_name)
        .bind(&post.category)
        .bind(&post.seo_title)
        .bind(&post.seo_description)
        .bind(post.reading_time)
        .bind(post.is_published)
        .bind(post.published_at)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BlogError::Database(e.to_string()))?;

        Ok(post)
    }

    async fn find_by_id_or_slug(&self, id_or_slug: &str) -> Result<Option<BlogPost>, BlogError> {
        // One combined lookup: a value that parses as a UUID may still be a
        // slug, so both columns are checked in the same query.
        let row = if let Ok(uuid) = Uuid::parse_str(id_or_slug) {
            sqlx::query_as::<_, BlogPostRow>(
                r#"
                SELECT id, title, slug, content, excerpt, featured_image, author_name,
                       category, seo_title, seo_description, reading_time, is_published,
                       published_at, created_at, updated_at
                FROM blog_posts
                WHERE id = $1 OR slug = $2
                "#,
            )
            .bind(uuid)
            .bind(id_or_slug)
            .fetch_optional(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, BlogPostRow>(
                r#"
                SELECT id, title, slug, content, excerpt, featured_image, author_name,
                       category, seo_title, seo_description, reading_time, is_published,
                       published_at, created_at, updated_at
                FROM blog_posts
                WHERE slug = $1
                "#,
            )
            .bind(id_or_slug)
            .fetch_optional(&self.pool)
            .await
        }
        .map_err(|e| BlogError::Database(e.to_string()))?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn find_by_id(&self, id: &BlogPostId) -> Result<Option<BlogPost>, BlogError> {
        let row = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT id, title, slug, content, excerpt, featured_image, author_name,
                   category, seo_title, seo_description, reading_time, is_published,
                   published_at, created_at, updated_at
            FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BlogError::Database(e.to_string()))?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn find_id_by_slug(&self, slug: &Slug) -> Result<Option<BlogPostId>, BlogError> {
        let row: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT id
            FROM blog_posts
            WHERE slug = $1
            "#,
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BlogError::Database(e.to_string()))?;

        Ok(row.map(|(id,)| BlogPostId(id)))
    }

    async fn list(&self, published_only: bool) -> Result<Vec<BlogPostSummary>, BlogError> {
        let query = if published_only {
            r#"
            SELECT id, title, slug, excerpt, featured_image, author_name,
                   category, is_published, published_at, reading_time
            FROM blog_posts
            WHERE is_published = TRUE
            ORDER BY created_at DESC
            "#
        } else {
            r#"
            SELECT id, title, slug, excerpt, featured_image, author_name,
                   category, is_published, published_at, reading_time
            FROM blog_posts
            ORDER BY created_at DESC
            "#
        };

        let rows = sqlx::query_as::<_, BlogPostSummaryRow>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BlogError::Database(e.to_string()))?;

        rows.into_iter().map(BlogPostSummary::try_from).collect()
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, BlogError> {
        let row = sqlx::query_as::<_, BlogPostRow>(
            r#"
            UPDATE blog_posts
            SET title = $2, slug = $3, content = $4, excerpt = $5, featured_image = $6,
                author_name = $7, category = $8, seo_title = $9, seo_description = $10,
                reading_time = $11, is_published = $12, published_at = $13, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, slug, content, excerpt, featured_image, author_name,
                      category, seo_title, seo_description, reading_time, is_published,
                      published_at, created_at, updated_at
            "#,
        )
        .bind(post.id.0)
        .bind(&post.title)
        .bind(post.slug.as_str())
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.featured_image)
        .bind(&post.author_name)
        .bind(&post.category)
        .bind(&post.seo_title)
        .bind(&post.seo_description)
        .bind(post.reading_time)
        .bind(post.is_published)
        .bind(post.published_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BlogError::Database(e.to_string()))?
        .ok_or_else(|| BlogError::Database("update affected no rows".to_string()))?;

        BlogPost::try_from(row)
    }

    async fn delete(&self, id: &BlogPostId) -> Result<(), BlogError> {
        let result = sqlx::query(
            r#"
            DELETE FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| BlogError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BlogError::Database("delete affected no rows".to_string()));
        }

        Ok(())
    }
}
