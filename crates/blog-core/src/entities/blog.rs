//! Blog entity - a container of entries with a declared sentiment

use chrono::{DateTime, Utc};

use crate::value_objects::{BlogId, Polarity};

/// Blog entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: BlogId,
    pub name: String,
    pub handle: String,
    /// Sentiment flag chosen by the owner; entries are checked against it
    pub positive: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new Blog
    pub fn new(id: BlogId, name: String, handle: String, positive: bool) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            handle,
            positive,
            created_at: now,
            updated_at: now,
        }
    }

    /// The polarity every entry of this blog must respect
    #[inline]
    pub fn polarity(&self) -> Polarity {
        if self.positive {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    /// Change the sentiment flag
    ///
    /// Existing entries are not re-validated.
    pub fn set_positive(&mut self, positive: bool) {
        self.positive = positive;
        self.updated_at = Utc::now();
    }

    pub fn rename(&mut self, name: String, handle: String) {
        self.name = name;
        self.handle = handle;
        self.updated_at = Utc::now();
    }
}
