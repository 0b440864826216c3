use crate::domain::ContentDomain;

/// Failures raised inside the content pipeline.
///
/// Public degrading entry points ([`crate::resolve`], [`crate::load`]) never
/// surface these; they are logged and replaced by the documented fallback.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Request failed: {0}")]
    Fetch(String),
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown locale tag: {0:?}")]
    UnknownLocale(String),
    #[error("{0} document is not a JSON array")]
    NotAnArray(ContentDomain),
}
