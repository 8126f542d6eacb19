use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_build_info() {
    let context = TestContext::new(None).await;

    let resp = context.api.other.build_info().await;
    assert_eq!(200, resp.status());

    let resp = resp.json_value().await;
    assert_eq!(resp["version"].as_str(), Some(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_build_info_disabled() {
    let config = indoc::indoc! {"
      app:
        enableServerInfo: false
    "}
    .to_string();
    let context = TestContext::new(Some(config)).await;

    let resp = context.api.other.build_info().await;
    assert_eq!(404, resp.status());
}

#[tokio::test]
async fn test_health() {
    let context = TestContext::new(None).await;

    let resp = context.api.other.health().await;
    assert_eq!(204, resp.status());
}

#[tokio::test]
async fn test_health_disabled() {
    let config = indoc::indoc! {"
      app:
        enableServerInfo: false
    "}
    .to_string();
    let context = TestContext::new(Some(config)).await;

    let resp = context.api.other.health().await;
    assert_eq!(404, resp.status());
}

#[tokio::test]
async fn test_openapi_documentation() {
    let context = TestContext::new(None).await;

    let resp = context.api.other.openapi_json().await;
    assert_eq!(200, resp.status());

    let resp = resp.json_value().await;
    assert!(resp["paths"]["/api/revalidate"]["post"].is_object());
    assert!(resp["components"]["securitySchemes"]["revalidateSecret"].is_object());
}

#[tokio::test]
async fn test_openapi_documentation_disabled() {
    let config = indoc::indoc! {"
      app:
        enableOpenApi: false
    "}
    .to_string();
    let context = TestContext::new(Some(config)).await;

    let resp = context.api.other.openapi_json().await;
    assert_eq!(404, resp.status());
}
