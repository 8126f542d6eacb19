use similar_asserts::assert_eq;

use crate::fixtures::SECRET;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_metrics() {
    let context = TestContext::new(None).await;
    context
        .api
        .revalidate
        .revalidate(SECRET, &["home"], &[])
        .await;

    let resp = context.api.other.metrics().await;
    assert_eq!(200, resp.status());

    let body = resp.text().await;
    assert!(body.contains("incoming_requests"));
    assert!(body.contains("response_time"));
}

#[tokio::test]
async fn test_metrics_disabled() {
    let config = indoc::indoc! {"
      app:
        enableMetrics: false
    "}
    .to_string();
    let context = TestContext::new(Some(config)).await;

    let resp = context.api.other.metrics().await;
    assert_eq!(404, resp.status());
}
