//! Blog database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for blogs table
#[derive(Debug, Clone, FromRow)]
pub struct BlogModel {
    pub id: i64,
    pub name: String,
    pub handle: String,
    pub positive: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
