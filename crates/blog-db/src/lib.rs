//! # blog-db
//!
//! Storage layer implementing the repository traits of `blog-core`.
//!
//! ## Overview
//!
//! - PostgreSQL connection pool and migrations (SQLx)
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - PostgreSQL repositories
//! - An in-memory store used for local runs and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_db::{create_pool, PgBlogRepository, PoolConfig};
//! use blog_core::BlogRepository;
//!
//! async fn example(db: &blog_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from(db)).await?;
//!     let blogs = PgBlogRepository::new(pool);
//!     let all = blogs.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryBlogRepository, MemoryEntryRepository, MemoryStore};
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgBlogRepository, PgEntryRepository};
