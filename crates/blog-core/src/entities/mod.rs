//! Domain entities - core business objects

mod blog;
mod entry;

pub use blog::Blog;
pub use entry::Entry;
