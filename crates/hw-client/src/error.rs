//! Error types for hopsworks-client.

/// Result type alias for hopsworks-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for hopsworks-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns the HTTP status if the server answered with a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::RestApi { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server answered with HTTP 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Non-2xx response from the REST API.
    #[error("REST API error: {status} {status_text} - {url}: {}", truncate_body(.body))]
    RestApi {
        url: String,
        status: u16,
        status_text: String,
        body: String,
    },

    /// Network-level failure (DNS, connection refused, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Shorten a response body to 500 characters for display.
///
/// Keeps error messages readable when the server sends back an HTML page.
pub fn truncate_body(body: &str) -> String {
    const MAX_LENGTH: usize = 500;

    if body.chars().count() <= MAX_LENGTH {
        return body.to_string();
    }
    let mut truncated: String = body.chars().take(MAX_LENGTH).collect();
    truncated.push_str("...[truncated]");
    truncated
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else if err.is_builder() {
            ErrorKind::InvalidUrl(err.to_string())
        } else {
            ErrorKind::Transport(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
