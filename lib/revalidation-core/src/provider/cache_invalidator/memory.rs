use tokio::sync::Mutex;

use super::{CacheInvalidator, CacheInvalidatorError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    Tag(String),
    Path(String),
}

/// Keeps a journal of issued invalidations in call order.
#[derive(Debug, Default)]
pub struct InMemoryCacheInvalidator {
    journal: Mutex<Vec<Invalidation>>,
}

impl InMemoryCacheInvalidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn journal(&self) -> Vec<Invalidation> {
        self.journal.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl CacheInvalidator for InMemoryCacheInvalidator {
    async fn invalidate_tag(&self, tag: &str) -> Result<(), CacheInvalidatorError> {
        self.journal
            .lock()
            .await
            .push(Invalidation::Tag(tag.to_owned()));
        Ok(())
    }

    async fn invalidate_path(&self, path: &str) -> Result<(), CacheInvalidatorError> {
        self.journal
            .lock()
            .await
            .push(Invalidation::Path(path.to_owned()));
        Ok(())
    }
}
