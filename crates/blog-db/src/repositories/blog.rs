//! PostgreSQL implementation of BlogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::{Blog, BlogId, BlogRepository, RepoResult};

use crate::mappers::BlogRow;
use crate::models::BlogModel;

use super::error::{blog_not_found, map_db_error};

/// PostgreSQL implementation of BlogRepository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    /// Create a new PgBlogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: BlogId) -> RepoResult<Option<Blog>> {
        let result = sqlx::query_as::<_, BlogModel>(
            r"
            SELECT id, name, handle, positive, created_at, updated_at
            FROM blogs
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Blog::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Blog>> {
        let results = sqlx::query_as::<_, BlogModel>(
            r"
            SELECT id, name, handle, positive, created_at, updated_at
            FROM blogs
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Blog::from).collect())
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id))]
    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        let row = BlogRow::new(blog);
        sqlx::query(
            r"
            INSERT INTO blogs (id, name, handle, positive, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(row.id)
        .bind(row.name)
        .bind(row.handle)
        .bind(row.positive)
        .bind(blog.created_at)
        .bind(blog.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id))]
    async fn update(&self, blog: &Blog) -> RepoResult<()> {
        let row = BlogRow::new(blog);
        let result = sqlx::query(
            r"
            UPDATE blogs
            SET name = $2, handle = $3, positive = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(row.id)
        .bind(row.name)
        .bind(row.handle)
        .bind(row.positive)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(blog_not_found(blog.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: BlogId) -> RepoResult<()> {
        // entries go with the blog through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(blog_not_found(id));
        }

        Ok(())
    }
}
