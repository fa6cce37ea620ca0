//! Test fixtures and request/response payloads
//!
//! Mirrors the JSON shapes of the REST API without depending on the
//! service crate's DTOs.

use serde::{Deserialize, Serialize};

/// Blog creation/replacement body
#[derive(Debug, Clone, Serialize)]
pub struct BlogPayload {
    pub name: String,
    pub handle: String,
    pub positive: bool,
}

impl BlogPayload {
    pub fn new(name: &str, positive: bool) -> Self {
        Self {
            name: name.to_string(),
            handle: name.to_lowercase().replace(' ', "-"),
            positive,
        }
    }
}

/// Entry creation/replacement body
#[derive(Debug, Clone, Serialize)]
pub struct EntryPayload {
    pub title: String,
    pub content: String,
    pub emoji: String,
    pub blog_id: i64,
}

impl EntryPayload {
    pub fn new(blog_id: i64, content: &str, emoji: &str) -> Self {
        Self {
            title: "Entry".to_string(),
            content: content.to_string(),
            emoji: emoji.to_string(),
            blog_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogBody {
    pub id: i64,
    pub name: String,
    pub handle: String,
    pub positive: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryBody {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub emoji: String,
    pub blog_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryPageBody {
    pub data: Vec<EntryBody>,
    pub pagination: PaginationBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationBody {
    pub page: i64,
    pub size: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurgeBody {
    pub deleted: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetailBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetailBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthBody {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadinessBody {
    pub status: String,
    pub checks: ReadinessChecksBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadinessChecksBody {
    pub storage: String,
    pub backend: String,
}
