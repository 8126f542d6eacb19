use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;

use self::other::OtherApi;
use self::revalidate::RevalidateApi;

pub mod other;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub async fn get(&self, url: &str) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client().get(url).send().await.unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, secret: Option<&str>, body: Option<Value>) -> Response {
        let url = format!("{}{url}", self.base_url);

        let mut request = http_client().post(url);
        if let Some(secret) = secret {
            request = request.header("x-revalidate-secret", secret);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let resp = request.send().await.unwrap();

        Response { resp }
    }

    pub async fn post_with_header_bytes(
        &self,
        url: &str,
        secret: &'static [u8],
        body: Value,
    ) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client()
            .post(url)
            .header(
                "x-revalidate-secret",
                reqwest::header::HeaderValue::from_bytes(secret).unwrap(),
            )
            .json(&body)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post_raw(&self, url: &str, secret: &str, body: &'static str) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client()
            .post(url)
            .header("x-revalidate-secret", secret)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();

        Response { resp }
    }
}

#[derive(Debug)]
pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().as_u16()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.resp
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        self.resp.json().await.unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }

    pub async fn text(self) -> String {
        self.resp.text().await.unwrap()
    }
}

pub struct Client {
    pub revalidate: RevalidateApi,
    pub other: OtherApi,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        let client = HttpClient { base_url };

        Self {
            revalidate: RevalidateApi::new(client.clone()),
            other: OtherApi::new(client),
        }
    }
}
