//! Service context - dependency container for services
//!
//! Holds the repositories, the optional database pool, and the id generator.

use std::sync::Arc;

use blog_core::{BlogRepository, EntryRepository, IdGenerator};
use blog_db::{MemoryBlogRepository, MemoryEntryRepository, MemoryStore, PgPool};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - Blog and entry repositories
/// - The PostgreSQL pool when running against a database
/// - The id generator
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent for the in-memory backend
    pool: Option<PgPool>,

    // Repositories
    blog_repo: Arc<dyn BlogRepository>,
    entry_repo: Arc<dyn EntryRepository>,

    id_generator: Arc<IdGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        blog_repo: Arc<dyn BlogRepository>,
        entry_repo: Arc<dyn EntryRepository>,
        id_generator: Arc<IdGenerator>,
    ) -> Self {
        Self {
            pool,
            blog_repo,
            entry_repo,
            id_generator,
        }
    }

    /// Context backed by a fresh in-memory store
    pub fn in_memory(id_generator: Arc<IdGenerator>) -> Self {
        let store = MemoryStore::new();
        Self::new(
            None,
            Arc::new(MemoryBlogRepository::new(store.clone())),
            Arc::new(MemoryEntryRepository::new(store)),
            id_generator,
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Probe the storage backend
    pub async fn storage_healthy(&self) -> bool {
        match &self.pool {
            Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            None => true,
        }
    }

    /// Name of the storage backend in use
    pub fn storage_backend(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }

    // === Repositories ===

    /// Get the blog repository
    pub fn blog_repo(&self) -> &dyn BlogRepository {
        self.blog_repo.as_ref()
    }

    /// Get the entry repository
    pub fn entry_repo(&self) -> &dyn EntryRepository {
        self.entry_repo.as_ref()
    }

    // === Ids ===

    /// Get the id generator
    pub fn id_generator(&self) -> &IdGenerator {
        self.id_generator.as_ref()
    }

    /// Generate a new id of the requested kind
    pub fn generate_id<T: From<i64>>(&self) -> T {
        self.id_generator.next_id()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("storage", &self.storage_backend())
            .field("repositories", &"...")
            .field("worker_id", &self.id_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    blog_repo: Option<Arc<dyn BlogRepository>>,
    entry_repo: Option<Arc<dyn EntryRepository>>,
    id_generator: Option<Arc<IdGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn blog_repo(mut self, repo: Arc<dyn BlogRepository>) -> Self {
        self.blog_repo = Some(repo);
        self
    }

    pub fn entry_repo(mut self, repo: Arc<dyn EntryRepository>) -> Self {
        self.entry_repo = Some(repo);
        self
    }

    pub fn id_generator(mut self, generator: Arc<IdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool,
            self.blog_repo
                .ok_or_else(|| ServiceError::validation("blog_repo is required"))?,
            self.entry_repo
                .ok_or_else(|| ServiceError::validation("entry_repo is required"))?,
            self.id_generator
                .ok_or_else(|| ServiceError::validation("id_generator is required"))?,
        ))
    }
}
