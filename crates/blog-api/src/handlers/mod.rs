//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod blogs;
pub mod entries;
pub mod health;
