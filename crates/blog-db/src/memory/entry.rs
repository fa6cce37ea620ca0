//! In-memory implementation of EntryRepository

use async_trait::async_trait;
use tracing::instrument;

use blog_core::{BlogId, DomainError, Entry, EntryId, EntryPage, EntryRepository, RepoResult};

use super::MemoryStore;

/// In-memory implementation of EntryRepository
///
/// Enforces the blog reference the way the foreign key does in PostgreSQL.
#[derive(Debug, Clone)]
pub struct MemoryEntryRepository {
    store: MemoryStore,
}

impl MemoryEntryRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntryRepository for MemoryEntryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        Ok(self.store.read(|t| t.entries.get(&id.into_inner()).cloned()))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, page: EntryPage) -> RepoResult<Vec<Entry>> {
        Ok(self.store.read(|t| {
            t.entries
                .values()
                .skip(usize::try_from(page.offset).unwrap_or(usize::MAX))
                .take(usize::try_from(page.limit).unwrap_or(0))
                .cloned()
                .collect()
        }))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        Ok(self.store.read(|t| t.entries.len() as i64))
    }

    #[instrument(skip(self))]
    async fn find_by_blog(&self, blog_id: BlogId) -> RepoResult<Vec<Entry>> {
        Ok(self.store.read(|t| {
            t.entries
                .values()
                .filter(|entry| entry.belongs_to(blog_id))
                .cloned()
                .collect()
        }))
    }

    #[instrument(skip(self, entry), fields(entry_id = %entry.id, blog_id = %entry.blog_id))]
    async fn create(&self, entry: &Entry) -> RepoResult<()> {
        self.store.write(|t| {
            if !t.blogs.contains_key(&entry.blog_id.into_inner()) {
                return Err(DomainError::BlogNotFound(entry.blog_id));
            }
            let key = entry.id.into_inner();
            if t.entries.contains_key(&key) {
                return Err(DomainError::DatabaseError(format!(
                    "duplicate entry id {}",
                    entry.id
                )));
            }
            t.entries.insert(key, entry.clone());
            Ok(())
        })
    }

    #[instrument(skip(self, entry), fields(entry_id = %entry.id, blog_id = %entry.blog_id))]
    async fn update(&self, entry: &Entry) -> RepoResult<()> {
        self.store.write(|t| {
            if !t.blogs.contains_key(&entry.blog_id.into_inner()) {
                return Err(DomainError::BlogNotFound(entry.blog_id));
            }
            match t.entries.get_mut(&entry.id.into_inner()) {
                Some(stored) => {
                    *stored = entry.clone();
                    Ok(())
                }
                None => Err(DomainError::EntryNotFound(entry.id)),
            }
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntryId) -> RepoResult<()> {
        self.store
            .write(|t| t.entries.remove(&id.into_inner()))
            .map(|_| ())
            .ok_or(DomainError::EntryNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBlogRepository;
    use blog_core::{Blog, BlogRepository, Emoji};

    async fn setup() -> (MemoryBlogRepository, MemoryEntryRepository) {
        let store = MemoryStore::new();
        let blogs = MemoryBlogRepository::new(store.clone());
        blogs
            .create(&Blog::new(BlogId::new(1), "One".to_string(), "one".to_string(), true))
            .await
            .unwrap();
        (blogs, MemoryEntryRepository::new(store))
    }

    fn entry(id: i64, blog_id: i64) -> Entry {
        Entry::new(
            EntryId::new(id),
            BlogId::new(blog_id),
            format!("Entry {id}"),
            "some content".to_string(),
            Emoji::Like,
        )
    }

    #[tokio::test]
    async fn test_create_requires_blog() {
        let (_, entries) = setup().await;
        let err = entries.create(&entry(10, 2)).await.unwrap_err();
        assert!(matches!(err, DomainError::BlogNotFound(id) if id == BlogId::new(2)));
        assert_eq!(entries.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_pagination_in_id_order() {
        let (_, entries) = setup().await;
        for id in [13, 11, 12, 10] {
            entries.create(&entry(id, 1)).await.unwrap();
        }

        let page = entries.find_page(EntryPage::new(1, 3)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, EntryId::new(13));

        let page = entries.find_page(EntryPage::new(0, 2)).await.unwrap();
        let ids: Vec<_> = page.iter().map(|e| e.id.into_inner()).collect();
        assert_eq!(ids, vec![10, 11]);
        assert_eq!(entries.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_blog_delete_cascades_to_entries() {
        let (blogs, entries) = setup().await;
        entries.create(&entry(10, 1)).await.unwrap();
        entries.create(&entry(11, 1)).await.unwrap();

        blogs.delete(BlogId::new(1)).await.unwrap();

        assert!(entries.find_by_blog(BlogId::new(1)).await.unwrap().is_empty());
        assert!(entries.find_by_id(EntryId::new(10)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let (_, entries) = setup().await;
        entries.create(&entry(10, 1)).await.unwrap();

        entries.delete(EntryId::new(10)).await.unwrap();
        let err = entries.delete(EntryId::new(10)).await.unwrap_err();
        assert!(matches!(err, DomainError::EntryNotFound(_)));
    }
}
