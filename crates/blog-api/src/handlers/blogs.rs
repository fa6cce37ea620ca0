//! Blog handlers
//!
//! Endpoints for blog management and blog-scoped entry operations.

use axum::{extract::State, Json};
use blog_core::BlogId;
use blog_service::{
    BlogRequest, BlogResponse, BlogService, EntryResponse, EntryService, PurgeResponse,
};

use crate::extractors::{IdPath, Keywords, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new blog
///
/// POST /blogs
pub async fn create_blog(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<BlogRequest>,
) -> ApiResult<Created<Json<BlogResponse>>> {
    let service = BlogService::new(state.service_context());
    let response = service.create_blog(request).await?;
    Ok(Created(Json(response)))
}

/// List all blogs
///
/// GET /blogs
pub async fn list_blogs(State(state): State<AppState>) -> ApiResult<Json<Vec<BlogResponse>>> {
    let service = BlogService::new(state.service_context());
    Ok(Json(service.list_blogs().await?))
}

/// Get blog by ID
///
/// GET /blogs/{blog_id}
pub async fn get_blog(
    State(state): State<AppState>,
    IdPath(blog_id): IdPath<BlogId>,
) -> ApiResult<Json<BlogResponse>> {
    let service = BlogService::new(state.service_context());
    Ok(Json(service.get_blog(blog_id).await?))
}

/// Replace a blog
///
/// PUT /blogs/{blog_id}
pub async fn update_blog(
    State(state): State<AppState>,
    IdPath(blog_id): IdPath<BlogId>,
    ValidatedJson(request): ValidatedJson<BlogRequest>,
) -> ApiResult<Json<BlogResponse>> {
    let service = BlogService::new(state.service_context());
    Ok(Json(service.update_blog(blog_id, request).await?))
}

/// Delete a blog and its entries
///
/// DELETE /blogs/{blog_id}
pub async fn delete_blog(
    State(state): State<AppState>,
    IdPath(blog_id): IdPath<BlogId>,
) -> ApiResult<NoContent> {
    let service = BlogService::new(state.service_context());
    service.delete_blog(blog_id).await?;
    Ok(NoContent)
}

/// List the entries of a blog
///
/// GET /blogs/{blog_id}/entries
pub async fn list_blog_entries(
    State(state): State<AppState>,
    IdPath(blog_id): IdPath<BlogId>,
) -> ApiResult<Json<Vec<EntryResponse>>> {
    let service = EntryService::new(state.service_context());
    Ok(Json(service.list_blog_entries(blog_id).await?))
}

/// Delete the blog's entries containing every keyword
///
/// DELETE /blogs/{blog_id}/entries?keywords=a,b
pub async fn purge_blog_entries(
    State(state): State<AppState>,
    IdPath(blog_id): IdPath<BlogId>,
    Keywords(keywords): Keywords,
) -> ApiResult<Json<PurgeResponse>> {
    let service = BlogService::new(state.service_context());
    let deleted = service
        .purge_blog_entries_by_keywords(blog_id, &keywords)
        .await?;
    Ok(Json(PurgeResponse { deleted }))
}
