//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod blog;
pub mod context;
pub mod entry;
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use blog::BlogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use entry::EntryService;
pub use error::{ServiceError, ServiceResult};
