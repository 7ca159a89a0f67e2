/// Custom error type for the firehose library
///
/// Transport, decoding and configuration failures all surface through this enum.
/// The static, user-facing messages shown next to a list live in
/// [`crate::models::errors::ListError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum FirehoseError {
    /// HTTP transport errors (connection, TLS, timeouts)
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Api { status: u16, detail: Option<String> },

    /// I/O errors (config and token files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(String),

    /// Requested record is not part of the loaded collection
    #[error("Bookmark with ID {0} not found")]
    BookmarkNotFound(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing or rejected credentials
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON errors, including JSON:API documents of the wrong shape
    #[error("JSON error: {0}")]
    Json(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

impl FirehoseError {
    /// HTTP status of an `Api` error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            FirehoseError::Api { status, .. } => Some(*status),
            FirehoseError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias using FirehoseError
pub type Result<T> = std::result::Result<T, FirehoseError>;

impl From<String> for FirehoseError {
    fn from(s: String) -> Self {
        FirehoseError::Other(s)
    }
}

impl From<&str> for FirehoseError {
    fn from(s: &str) -> Self {
        FirehoseError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for FirehoseError {
    fn from(err: serde_yaml::Error) -> Self {
        FirehoseError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for FirehoseError {
    fn from(err: serde_json::Error) -> Self {
        FirehoseError::Json(err.to_string())
    }
}
