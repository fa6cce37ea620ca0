//! Shared fixtures for service tests

use std::sync::Arc;

use blog_core::{BlogId, Emoji, IdGenerator};

use crate::dto::{BlogRequest, EntryRequest};

use super::context::ServiceContext;

pub(crate) fn memory_context() -> ServiceContext {
    ServiceContext::in_memory(Arc::new(IdGenerator::new(7).unwrap()))
}

pub(crate) fn blog_request(name: &str, positive: bool) -> BlogRequest {
    BlogRequest {
        name: name.to_string(),
        handle: name.to_lowercase().replace(' ', "-"),
        positive,
    }
}

pub(crate) fn entry_request(blog_id: BlogId, content: &str, emoji: Emoji) -> EntryRequest {
    EntryRequest {
        title: "An entry".to_string(),
        content: content.to_string(),
        date: None,
        emoji,
        blog_id,
    }
}
