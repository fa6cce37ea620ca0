//! End-to-end tests against the HTTP API
//!
//! Each test starts its own server on an ephemeral port with in-memory
//! storage, so they run without external services.

use anyhow::Result;
use integration_tests::{
    assert_error, assert_json, assert_status, BlogBody, BlogPayload, EntryBody, EntryPageBody,
    EntryPayload, HealthBody, PurgeBody, ReadinessBody, TestServer,
};
use reqwest::StatusCode;

async fn create_blog(server: &TestServer, name: &str, positive: bool) -> Result<BlogBody> {
    let response = server
        .post("/api/blogs", &BlogPayload::new(name, positive))
        .await?;
    assert_json(response, StatusCode::CREATED).await
}

async fn create_entry(
    server: &TestServer,
    blog_id: i64,
    content: &str,
    emoji: &str,
) -> Result<EntryBody> {
    let response = server
        .post("/api/entries", &EntryPayload::new(blog_id, content, emoji))
        .await?;
    assert_json(response, StatusCode::CREATED).await
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() -> Result<()> {
    let server = TestServer::start().await?;

    let health: HealthBody = assert_json(server.get("/health").await?, StatusCode::OK).await?;
    assert_eq!(health.status, "healthy");

    let ready: ReadinessBody =
        assert_json(server.get("/health/ready").await?, StatusCode::OK).await?;
    assert_eq!(ready.status, "ready");
    assert_eq!(ready.checks.storage, "healthy");
    assert_eq!(ready.checks.backend, "memory");
    Ok(())
}

#[tokio::test]
async fn test_request_id_is_returned() -> Result<()> {
    let server = TestServer::start().await?;
    let response = server.get("/health").await?;
    assert!(response.headers().contains_key("x-request-id"));
    Ok(())
}

// ============================================================================
// Blogs
// ============================================================================

#[tokio::test]
async fn test_blog_lifecycle() -> Result<()> {
    let server = TestServer::start().await?;

    let blog = create_blog(&server, "Sunny Days", true).await?;
    assert_eq!(blog.name, "Sunny Days");
    assert_eq!(blog.handle, "sunny-days");
    assert!(blog.positive);

    let fetched: BlogBody =
        assert_json(server.get(&format!("/api/blogs/{}", blog.id)).await?, StatusCode::OK).await?;
    assert_eq!(fetched.id, blog.id);

    let updated: BlogBody = assert_json(
        server
            .put(
                &format!("/api/blogs/{}", blog.id),
                &BlogPayload::new("Rainy Days", false),
            )
            .await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(updated.name, "Rainy Days");
    assert!(!updated.positive);

    let all: Vec<BlogBody> = assert_json(server.get("/api/blogs").await?, StatusCode::OK).await?;
    assert_eq!(all.len(), 1);

    assert_status(
        server.delete(&format!("/api/blogs/{}", blog.id)).await?,
        StatusCode::NO_CONTENT,
    )
    .await?;
    let code = assert_error(
        server.get(&format!("/api/blogs/{}", blog.id)).await?,
        StatusCode::NOT_FOUND,
    )
    .await?;
    assert_eq!(code, "BLOG_NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn test_blog_validation_errors() -> Result<()> {
    let server = TestServer::start().await?;

    let code = assert_error(
        server.post("/api/blogs", &BlogPayload::new("ab", true)).await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    assert_eq!(code, "VALIDATION_ERROR");

    let code = assert_error(
        server
            .post("/api/blogs", &serde_json::json!({ "name": "No flag", "handle": "nf" }))
            .await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    assert_eq!(code, "INVALID_BODY");

    let code = assert_error(server.get("/api/blogs/abc").await?, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "INVALID_PATH_PARAMETER");
    Ok(())
}

// ============================================================================
// Mood validation
// ============================================================================

#[tokio::test]
async fn test_entry_matching_blog_mood_is_created() -> Result<()> {
    let server = TestServer::start().await?;
    let happy = create_blog(&server, "Happy Place", true).await?;
    let gloomy = create_blog(&server, "Gloomy Place", false).await?;

    let entry = create_entry(&server, happy.id, "what a great day", "HAHA").await?;
    assert_eq!(entry.emoji, "HAHA");
    assert_eq!(entry.blog_id, happy.id);

    let entry = create_entry(&server, gloomy.id, "so very lonely tonight", "ANGRY").await?;
    assert_eq!(entry.emoji, "ANGRY");

    // LOVE carries no polarity
    create_entry(&server, gloomy.id, "nothing to say", "LOVE").await?;
    Ok(())
}

#[tokio::test]
async fn test_entry_with_contradicting_emoji_is_rejected() -> Result<()> {
    let server = TestServer::start().await?;
    let happy = create_blog(&server, "Happy Place", true).await?;
    let gloomy = create_blog(&server, "Gloomy Place", false).await?;

    let code = assert_error(
        server
            .post("/api/entries", &EntryPayload::new(happy.id, "fine", "SAD"))
            .await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    assert_eq!(code, "INVALID_EMOJI");

    let code = assert_error(
        server
            .post("/api/entries", &EntryPayload::new(gloomy.id, "fine", "LIKE"))
            .await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    assert_eq!(code, "INVALID_EMOJI");
    Ok(())
}

#[tokio::test]
async fn test_entry_with_contradicting_content_is_rejected() -> Result<()> {
    let server = TestServer::start().await?;
    let happy = create_blog(&server, "Happy Place", true).await?;
    let gloomy = create_blog(&server, "Gloomy Place", false).await?;

    let code = assert_error(
        server
            .post(
                "/api/entries",
                &EntryPayload::new(happy.id, "I am so sad today", "LOVE"),
            )
            .await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    assert_eq!(code, "INVALID_CONTENT");

    let code = assert_error(
        server
            .post(
                "/api/entries",
                &EntryPayload::new(gloomy.id, "we laugh a lot", "SAD"),
            )
            .await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    assert_eq!(code, "INVALID_CONTENT");

    // a phrase needs a space on both sides
    create_entry(&server, happy.id, "sad", "LIKE").await?;
    Ok(())
}

#[tokio::test]
async fn test_entry_update_is_revalidated() -> Result<()> {
    let server = TestServer::start().await?;
    let happy = create_blog(&server, "Happy Place", true).await?;
    let entry = create_entry(&server, happy.id, "sunshine", "LIKE").await?;

    let code = assert_error(
        server
            .put(
                &format!("/api/entries/{}", entry.id),
                &EntryPayload::new(happy.id, "sunshine", "ANGRY"),
            )
            .await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    assert_eq!(code, "INVALID_EMOJI");

    let updated: EntryBody = assert_json(
        server
            .put(
                &format!("/api/entries/{}", entry.id),
                &EntryPayload::new(happy.id, "more sunshine", "WOW"),
            )
            .await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(updated.content, "more sunshine");
    assert_eq!(updated.emoji, "WOW");
    Ok(())
}

#[tokio::test]
async fn test_entry_errors() -> Result<()> {
    let server = TestServer::start().await?;

    let code = assert_error(
        server
            .post("/api/entries", &EntryPayload::new(999, "hello", "LIKE"))
            .await?,
        StatusCode::NOT_FOUND,
    )
    .await?;
    assert_eq!(code, "BLOG_NOT_FOUND");

    let happy = create_blog(&server, "Happy Place", true).await?;
    let code = assert_error(
        server
            .post("/api/entries", &EntryPayload::new(happy.id, "hello", "MEH"))
            .await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    assert_eq!(code, "INVALID_BODY");

    let code = assert_error(server.get("/api/entries/12345").await?, StatusCode::NOT_FOUND).await?;
    assert_eq!(code, "ENTRY_NOT_FOUND");
    Ok(())
}

// ============================================================================
// Listings
// ============================================================================

#[tokio::test]
async fn test_entry_listing_pagination() -> Result<()> {
    let server = TestServer::start().await?;
    let blog = create_blog(&server, "Happy Place", true).await?;
    for i in 0..5 {
        create_entry(&server, blog.id, &format!("post {i}"), "LIKE").await?;
    }

    let response = server.get("/api/entries?page=1&size=2").await?;
    let total = response
        .headers()
        .get("x-total-count")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(total.as_deref(), Some("5"));

    let page: EntryPageBody = assert_json(response, StatusCode::OK).await?;
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].content, "post 2");
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.size, 2);
    assert_eq!(page.pagination.total, 5);

    let entries: Vec<EntryBody> = assert_json(
        server
            .get(&format!("/api/blogs/{}/entries", blog.id))
            .await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(entries.len(), 5);
    Ok(())
}

#[tokio::test]
async fn test_entry_listing_far_page_is_empty() -> Result<()> {
    let server = TestServer::start().await?;
    let blog = create_blog(&server, "Happy Place", true).await?;
    create_entry(&server, blog.id, "only post", "LIKE").await?;

    let page: EntryPageBody = assert_json(
        server.get("/api/entries?page=922337203685477580&size=100").await?,
        StatusCode::OK,
    )
    .await?;
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total, 1);
    Ok(())
}

// ============================================================================
// Keyword purge
// ============================================================================

#[tokio::test]
async fn test_purge_all_requires_every_keyword() -> Result<()> {
    let server = TestServer::start().await?;
    let first = create_blog(&server, "First Blog", true).await?;
    let second = create_blog(&server, "Second Blog", true).await?;

    create_entry(&server, first.id, "My Cat and my DOG", "LIKE").await?;
    create_entry(&server, first.id, "just the cat", "LIKE").await?;
    create_entry(&server, second.id, "a dog and a cat", "WOW").await?;
    let kept = create_entry(&server, second.id, "a lone dog", "WOW").await?;

    let purge: PurgeBody = assert_json(
        server.delete("/api/entries?keywords=cat,dog").await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(purge.deleted, 2);

    let page: EntryPageBody = assert_json(server.get("/api/entries").await?, StatusCode::OK).await?;
    assert_eq!(page.pagination.total, 2);
    assert!(page.data.iter().any(|e| e.id == kept.id));

    // idempotent
    let purge: PurgeBody = assert_json(
        server.delete("/api/entries?keywords=cat,dog").await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(purge.deleted, 0);
    Ok(())
}

#[tokio::test]
async fn test_purge_scoped_to_blog() -> Result<()> {
    let server = TestServer::start().await?;
    let first = create_blog(&server, "First Blog", true).await?;
    let second = create_blog(&server, "Second Blog", true).await?;

    create_entry(&server, first.id, "cat and dog", "LIKE").await?;
    create_entry(&server, second.id, "dog and cat", "LIKE").await?;

    let purge: PurgeBody = assert_json(
        server
            .delete(&format!("/api/blogs/{}/entries?keywords=cat,dog", first.id))
            .await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(purge.deleted, 1);

    let remaining: Vec<EntryBody> = assert_json(
        server
            .get(&format!("/api/blogs/{}/entries", second.id))
            .await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(remaining.len(), 1);

    let code = assert_error(
        server.delete("/api/blogs/999/entries?keywords=cat").await?,
        StatusCode::NOT_FOUND,
    )
    .await?;
    assert_eq!(code, "BLOG_NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn test_delete_blog_removes_its_entries() -> Result<()> {
    let server = TestServer::start().await?;
    let blog = create_blog(&server, "Short Lived", true).await?;
    let entry = create_entry(&server, blog.id, "soon gone", "LIKE").await?;

    assert_status(
        server.delete(&format!("/api/blogs/{}", blog.id)).await?,
        StatusCode::NO_CONTENT,
    )
    .await?;

    let code = assert_error(
        server.get(&format!("/api/entries/{}", entry.id)).await?,
        StatusCode::NOT_FOUND,
    )
    .await?;
    assert_eq!(code, "ENTRY_NOT_FOUND");
    Ok(())
}
