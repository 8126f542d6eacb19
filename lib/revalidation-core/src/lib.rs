#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use config::ConfigValidationError;
use config::core_config::CoreConfig;
use provider::cache_invalidator::CacheInvalidator;
use provider::cache_invalidator::provider::cache_invalidator_from_config;
use service::revalidation::RevalidationService;

pub mod config;
pub mod provider;
pub mod service;

#[derive(Clone)]
pub struct RevalidationCore {
    pub revalidation_service: RevalidationService,
}

impl RevalidationCore {
    /// Wires the services; `cache_invalidator` replaces the configured provider when given.
    pub fn new(
        config: CoreConfig,
        cache_invalidator: Option<Arc<dyn CacheInvalidator>>,
    ) -> Result<Self, ConfigValidationError> {
        let cache_invalidator = match cache_invalidator {
            Some(cache_invalidator) => cache_invalidator,
            None => cache_invalidator_from_config(&config.cache_invalidator)?,
        };

        Ok(Self {
            revalidation_service: RevalidationService::new(
                Arc::new(config.revalidation),
                cache_invalidator,
            ),
        })
    }
}
