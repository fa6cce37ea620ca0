//! Entry database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for entries table
#[derive(Debug, Clone, FromRow)]
pub struct EntryModel {
    pub id: i64,
    pub blog_id: i64,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    /// Upper-case emoji name, constrained by a CHECK in the schema
    pub emoji: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
