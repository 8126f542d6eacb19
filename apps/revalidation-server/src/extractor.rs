use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

pub const REVALIDATE_SECRET_HEADER: &str = "x-revalidate-secret";

/// JSON body that never rejects: a missing, unreadable or malformed body
/// yields `T::default()`.
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = Infallible;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(request, state).await {
            Ok(body) => body,
            Err(rejection) => {
                tracing::debug!(%rejection, "Request body unreadable, using empty body");
                return Ok(Self(T::default()));
            }
        };

        let value = serde_json::from_slice(&body).unwrap_or_else(|error| {
            if !body.is_empty() {
                tracing::debug!(%error, "Malformed request body, using empty body");
            }
            T::default()
        });

        Ok(Self(value))
    }
}

/// Value of the `x-revalidate-secret` header, if present. Invalid UTF-8 is
/// replaced lossily so such a header still takes precedence over the body.
pub struct SecretHeader(pub Option<String>);

impl<S> FromRequestParts<S> for SecretHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let secret = parts
            .headers
            .get(REVALIDATE_SECRET_HEADER)
            .map(|header| String::from_utf8_lossy(header.as_bytes()).into_owned());

        Ok(Self(secret))
    }
}
