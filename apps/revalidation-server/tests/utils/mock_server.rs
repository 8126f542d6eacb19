use serde_json::json;
use wiremock::http::Method;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

pub struct MockServer {
    mock: wiremock::MockServer,
}

impl MockServer {
    pub async fn new() -> Self {
        let mock = wiremock::MockServer::start().await;
        Self { mock }
    }

    pub fn uri(&self) -> String {
        self.mock.uri()
    }

    pub async fn purge_tag(&self, tag: &str, token: &str) {
        Mock::given(method(Method::POST))
            .and(path("/purge/tag"))
            .and(header("authorization", format!("Bearer {token}")))
            .and(body_json(json!({ "tag": tag })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn purge_path(&self, path_value: &str, token: &str) {
        Mock::given(method(Method::POST))
            .and(path("/purge/path"))
            .and(header("authorization", format!("Bearer {token}")))
            .and(body_json(json!({ "path": path_value })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn purge_unavailable(&self) {
        Mock::given(method(Method::POST))
            .respond_with(ResponseTemplate::new(503))
            .mount(&self.mock)
            .await;
    }
}
