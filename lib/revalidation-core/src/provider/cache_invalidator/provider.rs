use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use super::CacheInvalidator;
use super::http::HttpCacheInvalidator;
use super::log::LogCacheInvalidator;
use super::memory::InMemoryCacheInvalidator;
use crate::config::ConfigValidationError;
use crate::config::core_config::{CacheInvalidatorConfig, CacheInvalidatorType};

pub(crate) fn cache_invalidator_from_config(
    config: &CacheInvalidatorConfig,
) -> Result<Arc<dyn CacheInvalidator>, ConfigValidationError> {
    let invalidator: Arc<dyn CacheInvalidator> = match config.r#type {
        CacheInvalidatorType::Http => {
            let params = config.http_params()?;
            let client = reqwest::Client::builder()
                .timeout(params.timeout())
                .build()
                .map_err(|e| ConfigValidationError::InvalidParameter {
                    name: "cacheInvalidator.params",
                    reason: e.to_string(),
                })?;

            Arc::new(HttpCacheInvalidator::new(
                client,
                params.base_url.clone(),
                params
                    .token
                    .as_ref()
                    .map(|token| SecretString::from(token.expose_secret().to_owned())),
            ))
        }
        CacheInvalidatorType::Log => Arc::new(LogCacheInvalidator),
        CacheInvalidatorType::Memory => Arc::new(InMemoryCacheInvalidator::new()),
    };

    tracing::debug!(invalidator_type = %config.r#type, "Cache invalidator initialized");

    Ok(invalidator)
}
