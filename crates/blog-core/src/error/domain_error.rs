//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{BlogId, EntryId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Blog not found: {0}")]
    BlogNotFound(BlogId),

    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Invalid Emoji")]
    InvalidEmoji,

    #[error("Invalid Content")]
    InvalidContent,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::BlogNotFound(_) => "BLOG_NOT_FOUND",
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Business Rules
            Self::InvalidEmoji => "INVALID_EMOJI",
            Self::InvalidContent => "INVALID_CONTENT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BlogNotFound(_) | Self::EntryNotFound(_))
    }

    /// Check if the caller sent something the domain rejects (HTTP 400)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidEmoji | Self::InvalidContent
        )
    }

    /// Check if this is a sentiment mismatch between an entry and its blog
    pub fn is_mood_violation(&self) -> bool {
        matches!(self, Self::InvalidEmoji | Self::InvalidContent)
    }
}
