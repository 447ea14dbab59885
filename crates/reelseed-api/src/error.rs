use thiserror::Error;

/// Errors from the PostgREST client.
#[derive(Debug, Error)]
pub enum RestError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to encode request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("status {status}: {message}")]
    Api { status: u16, message: String },
}
