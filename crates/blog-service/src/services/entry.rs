//! Entry service
//!
//! Entry CRUD plus the mood checks every write goes through.

use blog_core::rules::mood;
use blog_core::{Blog, BlogId, DomainError, Entry, EntryId, EntryPage};
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{EntryRequest, EntryResponse, PageQuery, PaginatedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Entry service
pub struct EntryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EntryService<'a> {
    /// Create a new EntryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an entry after checking it against its blog
    #[instrument(skip(self, request), fields(blog_id = %request.blog_id))]
    pub async fn create_entry(&self, request: EntryRequest) -> ServiceResult<EntryResponse> {
        let mut entry = Entry::new(
            self.ctx.generate_id(),
            request.blog_id,
            request.title,
            request.content,
            request.emoji,
        );
        if let Some(date) = request.date {
            entry.date = date;
        }

        self.validate_entry(&entry).await?;
        self.ctx.entry_repo().create(&entry).await?;

        info!(entry_id = %entry.id, emoji = %entry.emoji, "Entry created");

        Ok(EntryResponse::from(entry))
    }

    /// Replace an entry's fields, re-running the mood checks
    #[instrument(skip(self, request))]
    pub async fn update_entry(
        &self,
        entry_id: EntryId,
        request: EntryRequest,
    ) -> ServiceResult<EntryResponse> {
        let mut entry = self.get_entry_entity(entry_id).await?;

        entry.blog_id = request.blog_id;
        entry.title = request.title;
        entry.content = request.content;
        entry.emoji = request.emoji;
        if let Some(date) = request.date {
            entry.date = date;
        }
        entry.updated_at = Utc::now();

        self.validate_entry(&entry).await?;
        self.ctx.entry_repo().update(&entry).await?;

        info!(entry_id = %entry.id, "Entry updated");

        Ok(EntryResponse::from(entry))
    }

    /// Check the entry's emoji against its blog's sentiment
    #[instrument(skip(self, entry), fields(entry_id = %entry.id, blog_id = %entry.blog_id))]
    pub async fn check_emoji(&self, entry: &Entry) -> ServiceResult<()> {
        let blog = self.blog_of(entry).await?;
        mood::check_emoji(&blog, entry.emoji)?;
        Ok(())
    }

    /// Check the entry's content against its blog's sentiment
    #[instrument(skip(self, entry), fields(entry_id = %entry.id, blog_id = %entry.blog_id))]
    pub async fn check_content(&self, entry: &Entry) -> ServiceResult<()> {
        let blog = self.blog_of(entry).await?;
        mood::check_content(&blog, &entry.content)?;
        Ok(())
    }

    /// Emoji check, then content check
    pub async fn validate_entry(&self, entry: &Entry) -> ServiceResult<()> {
        self.check_emoji(entry).await?;
        self.check_content(entry).await
    }

    /// Get entry by ID
    #[instrument(skip(self))]
    pub async fn get_entry(&self, entry_id: EntryId) -> ServiceResult<EntryResponse> {
        let entry = self.get_entry_entity(entry_id).await?;
        Ok(EntryResponse::from(entry))
    }

    /// Get entry entity by ID
    #[instrument(skip(self))]
    pub async fn get_entry_entity(&self, entry_id: EntryId) -> ServiceResult<Entry> {
        let entry = self
            .ctx
            .entry_repo()
            .find_by_id(entry_id)
            .await?
            .ok_or(DomainError::EntryNotFound(entry_id))?;
        Ok(entry)
    }

    /// One page of all entries, ordered by id
    #[instrument(skip(self))]
    pub async fn list_entries(
        &self,
        query: PageQuery,
    ) -> ServiceResult<PaginatedResponse<EntryResponse>> {
        let (page, size) = query.clamped();
        let entries = self
            .ctx
            .entry_repo()
            .find_page(EntryPage::new(page, size))
            .await?;
        let total = self.ctx.entry_repo().count().await?;

        Ok(PaginatedResponse::new(
            entries.into_iter().map(EntryResponse::from).collect(),
            page,
            size,
            total,
        ))
    }

    /// All entries of a blog
    #[instrument(skip(self))]
    pub async fn list_blog_entries(&self, blog_id: BlogId) -> ServiceResult<Vec<EntryResponse>> {
        if self.ctx.blog_repo().find_by_id(blog_id).await?.is_none() {
            return Err(DomainError::BlogNotFound(blog_id).into());
        }

        let entries = self.ctx.entry_repo().find_by_blog(blog_id).await?;
        Ok(entries.into_iter().map(EntryResponse::from).collect())
    }

    /// Delete a single entry
    #[instrument(skip(self))]
    pub async fn delete_entry(&self, entry_id: EntryId) -> ServiceResult<()> {
        self.ctx.entry_repo().delete(entry_id).await?;
        info!(entry_id = %entry_id, "Entry deleted");
        Ok(())
    }

    async fn blog_of(&self, entry: &Entry) -> ServiceResult<Blog> {
        let blog = self
            .ctx
            .blog_repo()
            .find_by_id(entry.blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(entry.blog_id))?;
        Ok(blog)
    }
}
