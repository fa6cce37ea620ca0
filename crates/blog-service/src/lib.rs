//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    BlogRequest, BlogResponse, EntryRequest, EntryResponse, HealthResponse, KeywordsQuery,
    PageQuery, PaginatedResponse, PurgeResponse, ReadinessResponse,
};
pub use services::{
    BlogService, EntryService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
