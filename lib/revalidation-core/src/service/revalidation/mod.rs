use std::sync::Arc;

use crate::config::core_config::RevalidationConfig;
use crate::provider::cache_invalidator::CacheInvalidator;

pub mod dto;
pub mod service;

mod normalizer;

#[derive(Clone)]
pub struct RevalidationService {
    config: Arc<RevalidationConfig>,
    cache_invalidator: Arc<dyn CacheInvalidator>,
}

impl RevalidationService {
    pub fn new(
        config: Arc<RevalidationConfig>,
        cache_invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            config,
            cache_invalidator,
        }
    }
}
