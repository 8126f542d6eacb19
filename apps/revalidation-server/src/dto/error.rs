use serde::Serialize;
use utoipa::ToSchema;

pub(crate) const FALLBACK_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    #[schema(example = false)]
    pub ok: bool,
    #[schema(example = "Unauthorized")]
    pub error: String,
}

impl ErrorResponseRestDTO {
    pub fn new(error: impl Into<String>) -> Self {
        let error = error.into();

        Self {
            ok: false,
            error: if error.is_empty() {
                FALLBACK_ERROR_MESSAGE.to_string()
            } else {
                error
            },
        }
    }

    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.error = FALLBACK_ERROR_MESSAGE.to_string();
        }

        self
    }
}
