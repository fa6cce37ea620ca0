//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Blog, Entry};
use crate::error::DomainError;
use crate::value_objects::{BlogId, EntryId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Blog Repository
// ============================================================================

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Find blog by ID
    async fn find_by_id(&self, id: BlogId) -> RepoResult<Option<Blog>>;

    /// List all blogs ordered by ID
    async fn find_all(&self) -> RepoResult<Vec<Blog>>;

    /// Create a new blog
    async fn create(&self, blog: &Blog) -> RepoResult<()>;

    /// Update an existing blog
    async fn update(&self, blog: &Blog) -> RepoResult<()>;

    /// Delete a blog together with its entries
    async fn delete(&self, id: BlogId) -> RepoResult<()>;
}

// ============================================================================
// Entry Repository
// ============================================================================

/// Offset pagination for entry listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPage {
    pub offset: i64,
    pub limit: i64,
}

impl EntryPage {
    /// Page `page` (zero based) of `size` entries
    ///
    /// The offset saturates at `i64::MAX`; such a page is simply empty.
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            offset: page.max(0).saturating_mul(size.max(0)),
            limit: size.max(0),
        }
    }
}

#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Find entry by ID
    async fn find_by_id(&self, id: EntryId) -> RepoResult<Option<Entry>>;

    /// List entries ordered by ID
    async fn find_page(&self, page: EntryPage) -> RepoResult<Vec<Entry>>;

    /// Total number of entries
    async fn count(&self) -> RepoResult<i64>;

    /// List all entries of a blog ordered by ID
    async fn find_by_blog(&self, blog_id: BlogId) -> RepoResult<Vec<Entry>>;

    /// Create a new entry
    async fn create(&self, entry: &Entry) -> RepoResult<()>;

    /// Update an existing entry
    async fn update(&self, entry: &Entry) -> RepoResult<()>;

    /// Delete an entry
    async fn delete(&self, id: EntryId) -> RepoResult<()>;
}
