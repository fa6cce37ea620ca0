//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::{Blog, Entry};

use super::responses::{BlogResponse, EntryResponse};

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id,
            name: blog.name.clone(),
            handle: blog.handle.clone(),
            positive: blog.positive,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self::from(&blog)
    }
}

impl From<&Entry> for EntryResponse {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            content: entry.content.clone(),
            date: entry.date,
            emoji: entry.emoji,
            blog_id: entry.blog_id,
        }
    }
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self::from(&entry)
    }
}
