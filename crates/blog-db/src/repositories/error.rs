//! Error handling utilities for repositories

use blog_core::{BlogId, DomainError, EntryId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for a foreign key violation and return the given error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_violation: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_violation();
        }
    }
    map_db_error(e)
}

/// Create a "blog not found" error
pub fn blog_not_found(id: BlogId) -> DomainError {
    DomainError::BlogNotFound(id)
}

/// Create an "entry not found" error
pub fn entry_not_found(id: EntryId) -> DomainError {
    DomainError::EntryNotFound(id)
}
