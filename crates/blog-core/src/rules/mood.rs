//! Mood rules - an entry's emoji and wording must agree with its blog
//!
//! Both checks are pure and fail fast on the first violation. Callers run
//! them before persisting an entry and abort the write on error.

use crate::entities::Blog;
use crate::error::DomainError;
use crate::value_objects::{Emoji, Polarity};

/// Phrases rejected in entries of a negative blog
///
/// Space padded: a phrase only matches as a word with a space on both
/// sides, so a word at the very start or end of the content never matches.
pub const POSITIVE_PHRASES: [&str; 5] = [" like ", " love ", " happy ", " haha ", " laugh "];

/// Phrases rejected in entries of a positive blog
pub const NEGATIVE_PHRASES: [&str; 5] = [" angry ", " sad ", " fear ", " cry ", " lonely "];

/// Reject an emoji whose polarity contradicts the blog's sentiment
pub fn check_emoji(blog: &Blog, emoji: Emoji) -> Result<(), DomainError> {
    match emoji.polarity() {
        Some(required) if required != blog.polarity() => Err(DomainError::InvalidEmoji),
        Some(_) => Ok(()),
        // unclassified emoji carry no constraint
        None => Ok(()),
    }
}

/// Reject content containing a phrase of the opposite sentiment
pub fn check_content(blog: &Blog, content: &str) -> Result<(), DomainError> {
    let forbidden = match blog.polarity() {
        Polarity::Positive => &NEGATIVE_PHRASES,
        Polarity::Negative => &POSITIVE_PHRASES,
    };

    let lowered = content.to_lowercase();
    if forbidden.iter().any(|phrase| lowered.contains(phrase)) {
        return Err(DomainError::InvalidContent);
    }
    Ok(())
}

/// Run the emoji check, then the content check
pub fn check_entry(blog: &Blog, emoji: Emoji, content: &str) -> Result<(), DomainError> {
    check_emoji(blog, emoji)?;
    check_content(blog, content)
}
