use time::OffsetDateTime;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevalidateRequestDTO {
    pub header_secret: Option<String>,
    pub body_secret: Option<String>,
    pub tags: Vec<String>,
    pub paths: Vec<String>,
}

impl RevalidateRequestDTO {
    /// Header value when non-empty, body `secret` otherwise.
    pub fn effective_secret(&self) -> Option<&str> {
        self.header_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .or(self.body_secret.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevalidateResponseDTO {
    pub tags: Vec<String>,
    pub paths: Vec<String>,
    pub now: OffsetDateTime,
}
