//! In-memory storage
//!
//! Process-local implementations of the repository traits, used when
//! `STORAGE_BACKEND=memory` and throughout the test suites.

mod blog;
mod entry;
mod store;

pub use blog::MemoryBlogRepository;
pub use entry::MemoryEntryRepository;
pub use store::MemoryStore;
