//! Route definitions
//!
//! API routes mounted under /api, health probes at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{blogs, entries, health};
use crate::state::AppState;

/// Create the main API router (health routes are separate so they bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new().merge(blog_routes()).merge(entry_routes())
}

/// Blog routes
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", post(blogs::create_blog).get(blogs::list_blogs))
        .route(
            "/blogs/:blog_id",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
        .route(
            "/blogs/:blog_id/entries",
            get(blogs::list_blog_entries).delete(blogs::purge_blog_entries),
        )
}

/// Entry routes
fn entry_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/entries",
            post(entries::create_entry)
                .get(entries::list_entries)
                .delete(entries::purge_entries),
        )
        .route(
            "/entries/:entry_id",
            get(entries::get_entry)
                .put(entries::update_entry)
                .delete(entries::delete_entry),
        )
}
