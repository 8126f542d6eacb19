use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use revalidation_core::service::error::ServiceError;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::ErrorResponseRestDTO;
use crate::router::AppState;

/// Machine endpoint responses must neither be cached nor indexed.
pub(crate) const MACHINE_ENDPOINT_HEADERS: [(&str, &str); 2] = [
    ("cache-control", "no-store"),
    ("x-robots-tag", "noindex, nofollow"),
];

#[derive(utoipa::IntoResponses)]
pub(crate) enum ErrorResponse {
    #[response(status = 401, description = "Unauthorized")]
    Unauthorized(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 500, description = "Internal error")]
    ServerError(#[to_schema] ErrorResponseRestDTO),
}

impl ErrorResponse {
    pub fn for_panic(panic_msg: String, hide_cause: bool) -> Self {
        Self::ServerError(ErrorResponseRestDTO::new(panic_msg).hide_cause(hide_cause))
    }

    fn from_service_error(error: ServiceError, hide_cause: bool) -> Self {
        let response = ErrorResponseRestDTO::new(error.to_string());
        match error {
            ServiceError::Unauthorized => Self::Unauthorized(response),
            ServiceError::MissingSecret => Self::ServerError(response),
            ServiceError::CacheInvalidator(_) => Self::ServerError(response.hide_cause(hide_cause)),
        }
    }

    #[track_caller]
    fn from_service_error_with_trace(
        error: ServiceError,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        let location = std::panic::Location::caller();
        if let ServiceError::Unauthorized = error {
            tracing::warn!(%location, "Rejected unauthorized request while {action_description}");
        } else {
            tracing::error!(%error, %location, "Error while {action_description}");
        }
        Self::from_service_error(error, state.config.hide_error_response_cause)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Unauthorized(error) => {
                (StatusCode::UNAUTHORIZED, MACHINE_ENDPOINT_HEADERS, Json(error)).into_response()
            }
            Self::ServerError(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                MACHINE_ENDPOINT_HEADERS,
                Json(error),
            )
                .into_response(),
        }
    }
}

fn with_error_responses<SuccessResponse: utoipa::IntoResponses>()
-> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
    use utoipa::IntoResponses;
    let mut responses = SuccessResponse::responses();
    responses.append(&mut ErrorResponse::responses());
    responses
}

pub(crate) enum OkOrErrorResponse<T> {
    Ok(T),
    Error(ErrorResponse),
}

impl<T> OkOrErrorResponse<T> {
    pub fn ok(value: impl Into<T>) -> Self {
        Self::Ok(value.into())
    }

    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, ServiceError>,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                error,
                state,
                action_description,
            )),
        }
    }
}

impl<T: Serialize> IntoResponse for OkOrErrorResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, MACHINE_ENDPOINT_HEADERS, Json(body)).into_response(),
            Self::Error(error) => error.into_response(),
        }
    }
}

impl<T: ToSchema> utoipa::IntoResponses for OkOrErrorResponse<T> {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
        #[derive(utoipa::IntoResponses)]
        #[response(status = 200, description = "OK")]
        struct SuccessResponse<T: ToSchema>(#[to_schema] T);

        with_error_responses::<SuccessResponse<T>>()
    }
}

impl<T> From<ErrorResponse> for OkOrErrorResponse<T> {
    fn from(value: ErrorResponse) -> Self {
        Self::Error(value)
    }
}
