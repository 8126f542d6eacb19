use revalidation_core::service::revalidation::dto::{RevalidateRequestDTO, RevalidateResponseDTO};

use super::dto::{RevalidateRequestRestDTO, RevalidateResponseRestDTO};

impl RevalidateRequestRestDTO {
    pub(crate) fn into_dto(self, header_secret: Option<String>) -> RevalidateRequestDTO {
        RevalidateRequestDTO {
            header_secret,
            body_secret: self.secret,
            tags: self.tags,
            paths: self.paths,
        }
    }
}

impl From<RevalidateResponseDTO> for RevalidateResponseRestDTO {
    fn from(value: RevalidateResponseDTO) -> Self {
        Self {
            ok: true,
            revalidated: true,
            tags: value.tags,
            paths: value.paths,
            now: value.now,
        }
    }
}
