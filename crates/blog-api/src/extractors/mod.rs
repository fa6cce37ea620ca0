//! Axum extractors for request handling
//!
//! Custom extractors for validation, ids in paths, and query parameters.

mod pagination;
mod path;
mod query;
mod validated;

pub use pagination::Pagination;
pub use path::IdPath;
pub use query::Keywords;
pub use validated::ValidatedJson;
