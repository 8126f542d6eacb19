//! Forwards invalidations to the hosting platform's purge API.
//!
//! `POST {baseUrl}/tag` with `{"tag": ...}` and `POST {baseUrl}/path` with
//! `{"path": ...}`; any non-2xx answer is an error.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use super::{CacheInvalidator, CacheInvalidatorError};


pub struct HttpCacheInvalidator {
    client: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

#[derive(Serialize)]
struct TagPurgeRequestDTO<'a> {
    tag: &'a str,
}

#[derive(Serialize)]
struct PathPurgeRequestDTO<'a> {
    path: &'a str,
}

impl HttpCacheInvalidator {
    pub fn new(client: reqwest::Client, mut base_url: Url, token: Option<SecretString>) -> Self {
        // `Url::join` replaces the last segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            client,
            base_url,
            token,
        }
    }

    async fn purge(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<(), CacheInvalidatorError> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| CacheInvalidatorError::Other(e.to_string()))?;

        let mut request = self.client.post(url.clone()).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| CacheInvalidatorError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%url, %status, "Purge request rejected");
            return Err(CacheInvalidatorError::StatusCode(status.as_u16()));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl CacheInvalidator for HttpCacheInvalidator {
    async fn invalidate_tag(&self, tag: &str) -> Result<(), CacheInvalidatorError> {
        self.purge("tag", &TagPurgeRequestDTO { tag }).await
    }

    async fn invalidate_path(&self, path: &str) -> Result<(), CacheInvalidatorError> {
        self.purge("path", &PathPurgeRequestDTO { path }).await
    }
}
