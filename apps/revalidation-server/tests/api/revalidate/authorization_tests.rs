use serde_json::json;
use similar_asserts::assert_eq;

use crate::fixtures::SECRET;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_revalidate_wrong_secret() {
    // GIVEN
    let context = TestContext::new(None).await;

    // WHEN
    let resp = context
        .api
        .revalidate
        .revalidate("wrong", &["home"], &["/movies"])
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.header("cache-control"), Some("no-store"));
    assert_eq!(resp.header("x-robots-tag"), Some("noindex, nofollow"));
    assert_eq!(
        resp.json_value().await,
        json!({ "ok": false, "error": "Unauthorized" })
    );
    assert!(context.invalidator.journal().await.is_empty());
}

#[tokio::test]
async fn test_revalidate_without_secret() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .revalidate
        .revalidate_with_body(None, json!({ "tags": ["home"] }))
        .await;

    assert_eq!(resp.status(), 401);
    assert!(context.invalidator.journal().await.is_empty());
}

#[tokio::test]
async fn test_revalidate_body_secret() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .revalidate
        .revalidate_with_body(None, json!({ "secret": SECRET, "tags": ["home"] }))
        .await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["tags"], json!(["home"]));
}

#[tokio::test]
async fn test_revalidate_body_secret_with_empty_header() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .revalidate
        .revalidate_with_body(Some(""), json!({ "secret": SECRET, "tags": ["home"] }))
        .await;

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_revalidate_header_secret_takes_precedence() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .revalidate
        .revalidate_with_body(Some("wrong"), json!({ "secret": SECRET, "tags": ["home"] }))
        .await;

    assert_eq!(resp.status(), 401);
    assert!(context.invalidator.journal().await.is_empty());
}

#[tokio::test]
async fn test_revalidate_non_utf8_header_takes_precedence() {
    let context = TestContext::new(None).await;

    let resp = context
        .api
        .revalidate
        .revalidate_with_header_bytes(
            b"test-\xffsecret",
            json!({ "secret": SECRET, "tags": ["home"] }),
        )
        .await;

    assert_eq!(resp.status(), 401);
    assert!(context.invalidator.journal().await.is_empty());
}

#[tokio::test]
async fn test_revalidate_secret_not_configured() {
    // GIVEN
    let config = indoc::indoc! {"
        revalidation:
            secret: \"\"
    "}
    .to_string();
    let context = TestContext::new(Some(config)).await;

    // WHEN
    let resp = context
        .api
        .revalidate
        .revalidate("anything", &["home"], &[])
        .await;

    // THEN
    assert_eq!(resp.status(), 500);
    assert_eq!(resp.header("cache-control"), Some("no-store"));
    assert_eq!(
        resp.json_value().await,
        json!({ "ok": false, "error": "REVALIDATE_SECRET is not set on the server" })
    );
    assert!(context.invalidator.journal().await.is_empty());
}
