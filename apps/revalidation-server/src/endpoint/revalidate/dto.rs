use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::deserialize::{deserialize_lenient_list, deserialize_lenient_string};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RevalidateRequestRestDTO {
    /// Used when the `x-revalidate-secret` header is missing or empty
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub secret: Option<String>,
    /// Cache tags to invalidate
    #[serde(deserialize_with = "deserialize_lenient_list")]
    #[schema(example = json!(["home", "movies"]))]
    pub tags: Vec<String>,
    /// Site-relative route paths to invalidate
    #[serde(deserialize_with = "deserialize_lenient_list")]
    #[schema(example = json!(["/movies", "/movies/2"]))]
    pub paths: Vec<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RevalidateResponseRestDTO {
    pub ok: bool,
    pub revalidated: bool,
    pub tags: Vec<String>,
    pub paths: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub now: OffsetDateTime,
}
