//! Value objects - immutable types that represent domain concepts

mod emoji;
mod id_generator;
mod ids;

pub use emoji::{Emoji, Polarity, UnknownEmoji};
pub use id_generator::{IdGenerator, InvalidWorkerId};
pub use ids::{BlogId, EntryId, IdParseError};
