//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate` for input validation.

use blog_core::{BlogId, Emoji};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Blog Requests
// ============================================================================

/// Create or replace a blog
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BlogRequest {
    #[validate(length(min = 3, max = 255, message = "Name must be 3-255 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 255, message = "Handle must be 2-255 characters"))]
    pub handle: String,

    /// Sentiment of the blog; entries are checked against it
    pub positive: bool,
}

// ============================================================================
// Entry Requests
// ============================================================================

/// Create or replace an entry
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EntryRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    /// Publication date, now when omitted
    pub date: Option<DateTime<Utc>>,

    pub emoji: Emoji,

    pub blog_id: BlogId,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// `?page=&size=` for entry listings
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub size: i64,
}

impl PageQuery {
    pub const MAX_SIZE: i64 = 100;

    /// Page number and size clamped to the accepted range
    pub fn clamped(self) -> (i64, i64) {
        (self.page.max(0), self.size.clamp(1, Self::MAX_SIZE))
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_page_size(),
        }
    }
}

fn default_page_size() -> i64 {
    20
}

/// `?keywords=a,b` for keyword purges
///
/// A missing parameter reads as the empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordsQuery {
    #[serde(default)]
    pub keywords: String,
}
