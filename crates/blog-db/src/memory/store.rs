//! Shared in-memory tables

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use blog_core::{Blog, Entry};

/// Blog and entry rows keyed by raw id, kept in id order
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) blogs: BTreeMap<i64, Blog>,
    pub(crate) entries: BTreeMap<i64, Entry>,
}

impl Tables {
    /// Remove a blog and every entry pointing at it
    pub(crate) fn remove_blog(&mut self, id: i64) -> Option<Blog> {
        let blog = self.blogs.remove(&id)?;
        self.entries
            .retain(|_, entry| entry.blog_id.into_inner() != id);
        Some(blog)
    }
}

/// Handle to a set of in-memory tables
///
/// Clones share the same tables, so a blog repository and an entry
/// repository built from one store see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
        f(&self.tables.read())
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        f(&mut self.tables.write())
    }

    /// Number of stored blogs
    pub fn blog_count(&self) -> usize {
        self.read(|t| t.blogs.len())
    }

    /// Number of stored entries
    pub fn entry_count(&self) -> usize {
        self.read(|t| t.entries.len())
    }

    /// Drop all data
    pub fn clear(&self) {
        self.write(|t| {
            t.blogs.clear();
            t.entries.clear();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::{BlogId, Emoji, EntryId};

    #[test]
    fn test_clones_share_tables() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.write(|t| {
            let blog = Blog::new(BlogId::new(1), "Shared".to_string(), "sh".to_string(), true);
            t.blogs.insert(1, blog);
        });

        assert_eq!(other.blog_count(), 1);
        other.clear();
        assert_eq!(store.blog_count(), 0);
    }

    #[test]
    fn test_remove_blog_cascades() {
        let store = MemoryStore::new();
        store.write(|t| {
            for id in [1, 2] {
                let blog = Blog::new(BlogId::new(id), format!("Blog {id}"), "b".to_string(), true);
                t.blogs.insert(id, blog);
            }
            for (id, blog) in [(10, 1), (11, 1), (12, 2)] {
                let entry = Entry::new(
                    EntryId::new(id),
                    BlogId::new(blog),
                    "t".to_string(),
                    "c".to_string(),
                    Emoji::Love,
                );
                t.entries.insert(id, entry);
            }
        });

        let removed = store.write(|t| t.remove_blog(1));
        assert!(removed.is_some());
        assert_eq!(store.blog_count(), 1);
        assert_eq!(store.entry_count(), 1);
        assert!(store.write(|t| t.remove_blog(1)).is_none());
    }
}
