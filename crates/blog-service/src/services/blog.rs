//! Blog service
//!
//! Blog CRUD and keyword purges over blog entries.

use blog_core::{Blog, BlogId, DomainError, KeywordFilter};
use tracing::{debug, info, instrument};

use crate::dto::{BlogRequest, BlogResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Blog service
pub struct BlogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlogService<'a> {
    /// Create a new BlogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new blog
    #[instrument(skip(self, request))]
    pub async fn create_blog(&self, request: BlogRequest) -> ServiceResult<BlogResponse> {
        let blog = Blog::new(
            self.ctx.generate_id(),
            request.name,
            request.handle,
            request.positive,
        );

        self.ctx.blog_repo().create(&blog).await?;

        info!(blog_id = %blog.id, positive = blog.positive, "Blog created");

        Ok(BlogResponse::from(blog))
    }

    /// Replace a blog's name, handle and sentiment
    ///
    /// Entries already in the blog are left as they are.
    #[instrument(skip(self, request))]
    pub async fn update_blog(
        &self,
        blog_id: BlogId,
        request: BlogRequest,
    ) -> ServiceResult<BlogResponse> {
        let mut blog = self.get_blog_entity(blog_id).await?;

        blog.rename(request.name, request.handle);
        if blog.positive != request.positive {
            blog.set_positive(request.positive);
        }

        self.ctx.blog_repo().update(&blog).await?;

        info!(blog_id = %blog.id, "Blog updated");

        Ok(BlogResponse::from(blog))
    }

    /// Get blog by ID
    #[instrument(skip(self))]
    pub async fn get_blog(&self, blog_id: BlogId) -> ServiceResult<BlogResponse> {
        let blog = self.get_blog_entity(blog_id).await?;
        Ok(BlogResponse::from(blog))
    }

    /// Get blog entity by ID
    #[instrument(skip(self))]
    pub async fn get_blog_entity(&self, blog_id: BlogId) -> ServiceResult<Blog> {
        let blog = self
            .ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(blog_id))?;
        Ok(blog)
    }

    /// List all blogs
    #[instrument(skip(self))]
    pub async fn list_blogs(&self) -> ServiceResult<Vec<BlogResponse>> {
        let blogs = self.ctx.blog_repo().find_all().await?;
        Ok(blogs.into_iter().map(BlogResponse::from).collect())
    }

    /// Delete a blog and its entries
    #[instrument(skip(self))]
    pub async fn delete_blog(&self, blog_id: BlogId) -> ServiceResult<()> {
        self.ctx.blog_repo().delete(blog_id).await?;
        info!(blog_id = %blog_id, "Blog deleted");
        Ok(())
    }

    /// Delete every entry, across all blogs, whose content contains all
    /// of the comma separated `keywords`
    ///
    /// Returns the number of deleted entries. Deletions are not rolled
    /// back if a later one fails.
    #[instrument(skip(self))]
    pub async fn purge_entries_by_keywords(&self, keywords: &str) -> ServiceResult<u64> {
        let filter = KeywordFilter::parse(keywords);
        let blogs = self.ctx.blog_repo().find_all().await?;

        let mut deleted = 0;
        for blog in &blogs {
            deleted += self.purge_blog(blog.id, &filter).await?;
        }

        info!(blogs = blogs.len(), deleted, "Keyword purge finished");
        Ok(deleted)
    }

    /// Same as [`Self::purge_entries_by_keywords`], restricted to one blog
    #[instrument(skip(self))]
    pub async fn purge_blog_entries_by_keywords(
        &self,
        blog_id: BlogId,
        keywords: &str,
    ) -> ServiceResult<u64> {
        let blog = self.get_blog_entity(blog_id).await?;
        let filter = KeywordFilter::parse(keywords);

        let deleted = self.purge_blog(blog.id, &filter).await?;

        info!(blog_id = %blog.id, deleted, "Blog keyword purge finished");
        Ok(deleted)
    }

    async fn purge_blog(&self, blog_id: BlogId, filter: &KeywordFilter) -> ServiceResult<u64> {
        let entries = self.ctx.entry_repo().find_by_blog(blog_id).await?;

        let mut deleted = 0;
        for entry in entries.iter().filter(|e| filter.matches(&e.content)) {
            match self.ctx.entry_repo().delete(entry.id).await {
                Ok(()) => {
                    debug!(entry_id = %entry.id, blog_id = %blog_id, "Purged entry");
                    deleted += 1;
                }
                // removed concurrently
                Err(DomainError::EntryNotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(deleted)
    }
}
