//! Entry entity <-> model mapper

use blog_core::{BlogId, DomainError, Emoji, Entry, EntryId};

use crate::models::EntryModel;

/// Convert EntryModel to Entry entity
///
/// Fails when the stored emoji is not one of the known names.
impl TryFrom<EntryModel> for Entry {
    type Error = DomainError;

    fn try_from(model: EntryModel) -> Result<Self, Self::Error> {
        let emoji = model.emoji.parse::<Emoji>().map_err(|e| {
            DomainError::DatabaseError(format!("entry {}: {e}", model.id))
        })?;

        Ok(Entry {
            id: EntryId::new(model.id),
            blog_id: BlogId::new(model.blog_id),
            title: model.title,
            content: model.content,
            date: model.date,
            emoji,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Column values of an Entry for insert and update statements
pub struct EntryRow<'a> {
    pub id: i64,
    pub blog_id: i64,
    pub title: &'a str,
    pub content: &'a str,
    pub emoji: &'static str,
}

impl<'a> EntryRow<'a> {
    pub fn new(entry: &'a Entry) -> Self {
        Self {
            id: entry.id.into_inner(),
            blog_id: entry.blog_id.into_inner(),
            title: &entry.title,
            content: &entry.content,
            emoji: entry.emoji.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(emoji: &str) -> EntryModel {
        let now = Utc::now();
        EntryModel {
            id: 42,
            blog_id: 1,
            title: "Walk".to_string(),
            content: "a walk in the park".to_string(),
            date: now,
            emoji: emoji.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_model_to_entity() {
        let entry = Entry::try_from(model("HAHA")).unwrap();
        assert_eq!(entry.id, EntryId::new(42));
        assert_eq!(entry.emoji, Emoji::Haha);
        assert_eq!(EntryRow::new(&entry).emoji, "HAHA");
    }

    #[test]
    fn test_unknown_emoji_is_database_error() {
        let err = Entry::try_from(model("SHRUG")).unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
