//! PostgreSQL implementation of EntryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::{BlogId, Entry, EntryId, EntryPage, EntryRepository, RepoResult};

use crate::mappers::EntryRow;
use crate::models::EntryModel;

use super::error::{blog_not_found, entry_not_found, map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of EntryRepository
#[derive(Clone)]
pub struct PgEntryRepository {
    pool: PgPool,
}

impl PgEntryRepository {
    /// Create a new PgEntryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_entries(models: Vec<EntryModel>) -> RepoResult<Vec<Entry>> {
    models.into_iter().map(Entry::try_from).collect()
}

#[async_trait]
impl EntryRepository for PgEntryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        let result = sqlx::query_as::<_, EntryModel>(
            r"
            SELECT id, blog_id, title, content, date, emoji, created_at, updated_at
            FROM entries
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Entry::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_page(&self, page: EntryPage) -> RepoResult<Vec<Entry>> {
        let results = sqlx::query_as::<_, EntryModel>(
            r"
            SELECT id, blog_id, title, content, date, emoji, created_at, updated_at
            FROM entries
            ORDER BY id
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_entries(results)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM entries")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_by_blog(&self, blog_id: BlogId) -> RepoResult<Vec<Entry>> {
        let results = sqlx::query_as::<_, EntryModel>(
            r"
            SELECT id, blog_id, title, content, date, emoji, created_at, updated_at
            FROM entries
            WHERE blog_id = $1
            ORDER BY id
            ",
        )
        .bind(blog_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_entries(results)
    }

    #[instrument(skip(self, entry), fields(entry_id = %entry.id, blog_id = %entry.blog_id))]
    async fn create(&self, entry: &Entry) -> RepoResult<()> {
        let row = EntryRow::new(entry);
        sqlx::query(
            r"
            INSERT INTO entries (id, blog_id, title, content, date, emoji, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(row.id)
        .bind(row.blog_id)
        .bind(row.title)
        .bind(row.content)
        .bind(entry.date)
        .bind(row.emoji)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || blog_not_found(entry.blog_id)))?;

        Ok(())
    }

    #[instrument(skip(self, entry), fields(entry_id = %entry.id, blog_id = %entry.blog_id))]
    async fn update(&self, entry: &Entry) -> RepoResult<()> {
        let row = EntryRow::new(entry);
        let result = sqlx::query(
            r"
            UPDATE entries
            SET blog_id = $2, title = $3, content = $4, date = $5, emoji = $6, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(row.id)
        .bind(row.blog_id)
        .bind(row.title)
        .bind(row.content)
        .bind(entry.date)
        .bind(row.emoji)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || blog_not_found(entry.blog_id)))?;

        if result.rows_affected() == 0 {
            return Err(entry_not_found(entry.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntryId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(entry_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgEntryRepository>();
    }
}
