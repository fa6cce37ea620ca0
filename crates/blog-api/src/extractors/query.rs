//! Keyword list extractor for purge endpoints

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_service::KeywordsQuery;

use crate::response::ApiError;

/// Raw `keywords` query value, empty when the parameter is absent
///
/// The value is passed on untouched; splitting happens in the purge.
#[derive(Debug, Clone, Default)]
pub struct Keywords(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Keywords
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<KeywordsQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Keywords(params.keywords))
    }
}
