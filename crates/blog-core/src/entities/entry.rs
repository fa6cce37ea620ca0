//! Entry entity - a post belonging to a blog

use chrono::{DateTime, Utc};

use crate::value_objects::{BlogId, Emoji, EntryId};

/// Entry entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub blog_id: BlogId,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub emoji: Emoji,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Create a new Entry dated now
    pub fn new(id: EntryId, blog_id: BlogId, title: String, content: String, emoji: Emoji) -> Self {
        let now = Utc::now();
        Self {
            id,
            blog_id,
            title,
            content,
            date: now,
            emoji,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the entry belongs to a blog
    #[inline]
    pub fn belongs_to(&self, blog_id: BlogId) -> bool {
        self.blog_id == blog_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = Entry::new(
            EntryId::new(10),
            BlogId::new(1),
            "Hello".to_string(),
            "I have a cat".to_string(),
            Emoji::Like,
        );
        assert_eq!(entry.emoji, Emoji::Like);
        assert_eq!(entry.date, entry.created_at);
        assert!(entry.belongs_to(BlogId::new(1)));
        assert!(!entry.belongs_to(BlogId::new(2)));
    }
}
