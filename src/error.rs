use thiserror::Error;

/// Failures surfaced by the remote content store and the draw pipeline.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("authentication rejected by the content store")]
    Auth,

    #[error("remote file not found: {path}")]
    NotFound { path: String },

    #[error("write conflict: the remote file changed since it was fetched")]
    Conflict,

    #[error("content store request failed: {0}")]
    Transient(String),

    #[error("remote file is not valid JSON: {0}")]
    MalformedData(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transient(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedData(err.to_string())
    }
}
