//! Entry handlers
//!
//! Endpoints for entry management and the global keyword purge.

use axum::{extract::State, Json};
use blog_core::EntryId;
use blog_service::{
    BlogService, EntryRequest, EntryResponse, EntryService, PaginatedResponse, PurgeResponse,
};

use crate::extractors::{IdPath, Keywords, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent, WithTotalCount};
use crate::state::AppState;

/// Create an entry; rejected when its mood contradicts the blog
///
/// POST /entries
pub async fn create_entry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EntryRequest>,
) -> ApiResult<Created<Json<EntryResponse>>> {
    let service = EntryService::new(state.service_context());
    let response = service.create_entry(request).await?;
    Ok(Created(Json(response)))
}

/// List entries page by page
///
/// GET /entries?page=0&size=20
pub async fn list_entries(
    State(state): State<AppState>,
    Pagination(query): Pagination,
) -> ApiResult<WithTotalCount<Json<PaginatedResponse<EntryResponse>>>> {
    let service = EntryService::new(state.service_context());
    let page = service.list_entries(query).await?;
    Ok(WithTotalCount {
        total: page.pagination.total,
        body: Json(page),
    })
}

/// Get entry by ID
///
/// GET /entries/{entry_id}
pub async fn get_entry(
    State(state): State<AppState>,
    IdPath(entry_id): IdPath<EntryId>,
) -> ApiResult<Json<EntryResponse>> {
    let service = EntryService::new(state.service_context());
    Ok(Json(service.get_entry(entry_id).await?))
}

/// Replace an entry; the mood checks run again
///
/// PUT /entries/{entry_id}
pub async fn update_entry(
    State(state): State<AppState>,
    IdPath(entry_id): IdPath<EntryId>,
    ValidatedJson(request): ValidatedJson<EntryRequest>,
) -> ApiResult<Json<EntryResponse>> {
    let service = EntryService::new(state.service_context());
    Ok(Json(service.update_entry(entry_id, request).await?))
}

/// Delete an entry
///
/// DELETE /entries/{entry_id}
pub async fn delete_entry(
    State(state): State<AppState>,
    IdPath(entry_id): IdPath<EntryId>,
) -> ApiResult<NoContent> {
    let service = EntryService::new(state.service_context());
    service.delete_entry(entry_id).await?;
    Ok(NoContent)
}

/// Delete entries of every blog containing every keyword
///
/// DELETE /entries?keywords=a,b
pub async fn purge_entries(
    State(state): State<AppState>,
    Keywords(keywords): Keywords,
) -> ApiResult<Json<PurgeResponse>> {
    let service = BlogService::new(state.service_context());
    let deleted = service.purge_entries_by_keywords(&keywords).await?;
    Ok(Json(PurgeResponse { deleted }))
}
