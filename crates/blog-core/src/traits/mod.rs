//! Domain ports

mod repositories;

pub use repositories::{BlogRepository, EntryPage, EntryRepository, RepoResult};
