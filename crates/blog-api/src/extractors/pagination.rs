//! Pagination extractor
//!
//! Extracts `?page=&size=` offset pagination from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_service::PageQuery;

use crate::response::ApiError;

/// Validated page parameters, zero based page and a size in 1..=100
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageQuery);

impl From<PageQuery> for Pagination {
    fn from(query: PageQuery) -> Self {
        let (page, size) = query.clamped();
        Self(PageQuery { page, size })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Pagination::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_clamping() {
        let Pagination(query) = Pagination::from(PageQuery { page: 2, size: 500 });
        assert_eq!(query.page, 2);
        assert_eq!(query.size, PageQuery::MAX_SIZE);

        let Pagination(query) = Pagination::from(PageQuery { page: -1, size: 0 });
        assert_eq!((query.page, query.size), (0, 1));
    }
}
