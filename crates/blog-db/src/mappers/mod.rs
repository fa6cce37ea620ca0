//! Entity <-> Model mappers
//!
//! Conversions between domain entities and database models.

mod blog;
mod entry;

pub use blog::BlogRow;
pub use entry::EntryRow;
