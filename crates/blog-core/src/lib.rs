//! # blog-core
//!
//! Domain layer containing entities, value objects, mood rules and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod rules;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Blog, Entry};
pub use error::DomainError;
pub use rules::KeywordFilter;
pub use traits::{BlogRepository, EntryPage, EntryRepository, RepoResult};
pub use value_objects::{
    BlogId, Emoji, EntryId, IdGenerator, IdParseError, InvalidWorkerId, Polarity, UnknownEmoji,
};
