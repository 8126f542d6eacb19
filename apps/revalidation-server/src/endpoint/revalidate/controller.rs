use axum::extract::State;

use super::dto::{RevalidateRequestRestDTO, RevalidateResponseRestDTO};
use crate::dto::response::OkOrErrorResponse;
use crate::extractor::{LenientJson, SecretHeader};
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/revalidate",
    request_body = RevalidateRequestRestDTO,
    params(
        ("x-revalidate-secret" = Option<String>, Header, description = "Shared revalidation secret"),
    ),
    responses(OkOrErrorResponse<RevalidateResponseRestDTO>),
    tag = "revalidation",
    security(
        ("revalidateSecret" = [])
    ),
    summary = "Revalidate cache",
    description = indoc::formatdoc! {"
        Invalidates the given cache tags and site-relative paths.

        The secret is read from the `x-revalidate-secret` header, or from the
        `secret` body field when the header is missing or empty. Tags and paths
        are trimmed and deduplicated, paths pointing to another origin are
        dropped and each list is capped.
    "},
)]
pub(crate) async fn post_revalidate(
    state: State<AppState>,
    SecretHeader(header_secret): SecretHeader,
    LenientJson(request): LenientJson<RevalidateRequestRestDTO>,
) -> OkOrErrorResponse<RevalidateResponseRestDTO> {
    let result = state
        .core
        .revalidation_service
        .revalidate(request.into_dto(header_secret))
        .await;

    OkOrErrorResponse::from_result(result, state, "revalidating cache")
}
