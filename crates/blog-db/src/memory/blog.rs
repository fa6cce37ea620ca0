//! In-memory implementation of BlogRepository

use async_trait::async_trait;
use tracing::instrument;

use blog_core::{Blog, BlogId, BlogRepository, DomainError, RepoResult};

use super::MemoryStore;

/// In-memory implementation of BlogRepository
#[derive(Debug, Clone)]
pub struct MemoryBlogRepository {
    store: MemoryStore,
}

impl MemoryBlogRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BlogRepository for MemoryBlogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: BlogId) -> RepoResult<Option<Blog>> {
        Ok(self.store.read(|t| t.blogs.get(&id.into_inner()).cloned()))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Blog>> {
        Ok(self.store.read(|t| t.blogs.values().cloned().collect()))
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id))]
    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        self.store.write(|t| {
            let key = blog.id.into_inner();
            if t.blogs.contains_key(&key) {
                return Err(DomainError::DatabaseError(format!(
                    "duplicate blog id {}",
                    blog.id
                )));
            }
            t.blogs.insert(key, blog.clone());
            Ok(())
        })
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id))]
    async fn update(&self, blog: &Blog) -> RepoResult<()> {
        self.store.write(|t| match t.blogs.get_mut(&blog.id.into_inner()) {
            Some(stored) => {
                *stored = blog.clone();
                Ok(())
            }
            None => Err(DomainError::BlogNotFound(blog.id)),
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: BlogId) -> RepoResult<()> {
        self.store
            .write(|t| t.remove_blog(id.into_inner()))
            .map(|_| ())
            .ok_or(DomainError::BlogNotFound(id))
    }
}
