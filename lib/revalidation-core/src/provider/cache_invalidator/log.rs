use super::{CacheInvalidator, CacheInvalidatorError};

/// Only reports invalidations to the log, for local development.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCacheInvalidator;

#[async_trait::async_trait]
impl CacheInvalidator for LogCacheInvalidator {
    async fn invalidate_tag(&self, tag: &str) -> Result<(), CacheInvalidatorError> {
        tracing::info!(%tag, "Tag invalidation requested");
        Ok(())
    }

    async fn invalidate_path(&self, path: &str) -> Result<(), CacheInvalidatorError> {
        tracing::info!(%path, "Path invalidation requested");
        Ok(())
    }
}
