use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unsupported model '{name}'. Allowed: {allowed}")]
    UnsupportedModel { name: String, allowed: String },
    #[error("{0}")]
    InvalidArgument(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("inference service returned {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },
}

impl ClientError {
    /// True for transport failures and non-success responses alike.
    pub fn is_http(&self) -> bool {
        matches!(self, ClientError::Http(_) | ClientError::HttpStatus { .. })
    }
}
