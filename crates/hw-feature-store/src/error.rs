//! Error types for hopsworks-feature-store.

/// Result type alias for feature store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for feature store operations.
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

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound(message.into()))
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Precondition(message.into()))
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput(message.into()))
    }

    /// Returns the HTTP status if the server answered with a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::RestApi { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the resource is absent: an empty lookup result or HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound(_)) || self.status() == Some(404)
    }

    /// Returns true if the call was rejected before any request was sent.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Precondition(_) | ErrorKind::InvalidInput(_)
        )
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
    #[error(
        "REST API error: {status} {status_text} - {url}: {}",
        hopsworks_client::truncate_body(.body)
    )]
    RestApi {
        url: String,
        status: u16,
        status_text: String,
        body: String,
    },

    /// Network-level failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Resource lookup returned nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Required session state is missing.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Caller-supplied data was rejected before sending.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<hopsworks_client::Error> for Error {
    fn from(err: hopsworks_client::Error) -> Self {
        use hopsworks_client::ErrorKind as ClientErrorKind;

        let kind = match &err.kind {
            ClientErrorKind::RestApi {
                url,
                status,
                status_text,
                body,
            } => ErrorKind::RestApi {
                url: url.clone(),
                status: *status,
                status_text: status_text.clone(),
                body: body.clone(),
            },
            ClientErrorKind::Transport(msg) => ErrorKind::Transport(msg.clone()),
            ClientErrorKind::Json(msg) => ErrorKind::Json(msg.clone()),
            ClientErrorKind::InvalidUrl(msg) | ClientErrorKind::Config(msg) => {
                ErrorKind::Config(msg.clone())
            }
        };
        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
