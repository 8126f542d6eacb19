//! Hosting platform cache primitives.
//!
//! The gateway never caches anything itself, it only tells the platform which
//! entries to drop. Each implementation forwards one invalidation per call.

use thiserror::Error;

pub mod http;
pub mod log;
pub mod memory;
pub mod provider;

#[derive(Debug, Error)]
pub enum CacheInvalidatorError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Cache invalidation rejected with status code {0}")]
    StatusCode(u16),
    #[error("Other cache invalidator error: {0}")]
    Other(String),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Discards every cached response labelled with `tag`, regardless of URL.
    async fn invalidate_tag(&self, tag: &str) -> Result<(), CacheInvalidatorError>;

    /// Discards the cached response of the single route at `path`.
    async fn invalidate_path(&self, path: &str) -> Result<(), CacheInvalidatorError>;
}
