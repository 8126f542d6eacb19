use thiserror::Error;

use crate::provider::cache_invalidator::CacheInvalidatorError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Deployment mistake, the server has nothing to compare credentials against.
    #[error("REVALIDATE_SECRET is not set on the server")]
    MissingSecret,
    #[error("Unauthorized")]
    Unauthorized,
    #[error(transparent)]
    CacheInvalidator(#[from] CacheInvalidatorError),
}
