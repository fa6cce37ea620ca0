//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Ids are serialized as JSON numbers.

use blog_core::{BlogId, Emoji, EntryId};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response with offset pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: i64, size: i64, total: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta { page, size, total },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Zero based page number
    pub page: i64,
    /// Page size used
    pub size: i64,
    /// Total number of items across all pages
    pub total: i64,
}

// ============================================================================
// Blog Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BlogResponse {
    pub id: BlogId,
    pub name: String,
    pub handle: String,
    pub positive: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Entry Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub emoji: Emoji,
    pub blog_id: BlogId,
}

/// Outcome of a keyword purge
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PurgeResponse {
    /// Number of entries removed
    pub deleted: u64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status of the storage backend
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
    pub backend: String,
}

impl ReadinessResponse {
    pub fn ready(backend: &str, storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
                backend: backend.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
