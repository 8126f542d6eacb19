use subtle::ConstantTimeEq;
use time::OffsetDateTime;

use super::RevalidationService;
use super::dto::{RevalidateRequestDTO, RevalidateResponseDTO};
use super::normalizer::{normalize_path, normalize_tag, normalize_values};
use crate::service::error::ServiceError;

impl RevalidationService {
    /// Authorizes the request, normalizes the targets and invalidates them,
    /// all tags first, then all paths, one call at a time.
    ///
    /// Nothing is invalidated unless the request is authorized.
    pub async fn revalidate(
        &self,
        request: RevalidateRequestDTO,
    ) -> Result<RevalidateResponseDTO, ServiceError> {
        let expected_secret = self.config.secret().ok_or(ServiceError::MissingSecret)?;
        let supplied_secret = request.effective_secret().unwrap_or_default();

        if !bool::from(supplied_secret.as_bytes().ct_eq(expected_secret.as_bytes())) {
            return Err(ServiceError::Unauthorized);
        }

        let max_entries = self.config.max_entries();
        let tags = normalize_values(&request.tags, max_entries, |tag| {
            normalize_tag(tag, self.config.tag_max_length)
        });
        let paths = normalize_values(&request.paths, max_entries, |path| {
            normalize_path(path, self.config.path_max_length)
        });

        for tag in &tags {
            self.cache_invalidator.invalidate_tag(tag).await?;
            tracing::debug!(%tag, "Tag invalidated");
        }

        for path in &paths {
            self.cache_invalidator.invalidate_path(path).await?;
            tracing::debug!(%path, "Path invalidated");
        }

        tracing::info!(
            tags = tags.len(),
            paths = paths.len(),
            "Revalidation completed"
        );

        Ok(RevalidateResponseDTO {
            tags,
            paths,
            now: OffsetDateTime::now_utc(),
        })
    }
}
