//! High-level Hopsworks client with typed HTTP methods.
//!
//! This module provides `HopsworksClient`, which combines the instance base
//! URL and API key with an HTTP client and provides typed JSON methods for
//! API interactions.
//!
//! ## Security
//!
//! - The API key is redacted in Debug output
//! - Request bodies are skipped in tracing spans

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::Response;
use crate::API_BASE_PATH;

/// High-level Hopsworks API client.
///
/// Cheap to clone: the underlying reqwest client is reference counted.
///
/// # Example
///
/// ```rust,ignore
/// use hopsworks_client::{ClientConfig, HopsworksClient};
///
/// let client = HopsworksClient::new(
///     ClientConfig::builder("my-instance.cloud.hopsworks.ai")
///         .with_api_key("secret")
///         .build(),
/// )?;
///
/// // GET https://my-instance...:443/hopsworks-api/api/project
/// let projects: serde_json::Value = client.get_json(&["project"]).await?;
/// ```
#[derive(Clone)]
pub struct HopsworksClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for HopsworksClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HopsworksClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl HopsworksClient {
    /// Create a new client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.host.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "host must not be empty".to_string(),
            )));
        }

        let base_url = config.base_url();
        url::Url::parse(&base_url)?;

        let api_key = config.api_key.clone();
        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Get the base URL, e.g. `https://host:443`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns true if requests carry an API key.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Build the URL for path segments under the API base path.
    ///
    /// Example: `api_url(&["project", "demo"])` ->
    /// `https://host:443/hopsworks-api/api/project/demo`
    pub fn api_url<S: AsRef<str>>(&self, segments: &[S]) -> String {
        self.url(segments, true)
    }

    /// Build the URL for path segments, optionally under the API base path.
    ///
    /// Each segment is percent-encoded so user-provided names cannot break
    /// out of their path position.
    pub fn url<S: AsRef<str>>(&self, segments: &[S], with_base_path: bool) -> String {
        let mut url = self.base_url.clone();
        if with_base_path {
            for segment in API_BASE_PATH {
                url.push('/');
                url.push_str(segment);
            }
        }
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment.as_ref()));
        }
        url
    }

    // =========================================================================
    // Base HTTP Methods (with authentication)
    // =========================================================================

    /// Create an authenticated request builder for path segments under the
    /// API base path.
    pub fn request<S: AsRef<str>>(&self, method: RequestMethod, segments: &[S]) -> RequestBuilder {
        self.authenticate(RequestBuilder::new(method, self.api_url(segments)))
    }

    /// Create a GET request builder with authentication.
    pub fn get<S: AsRef<str>>(&self, segments: &[S]) -> RequestBuilder {
        self.request(RequestMethod::Get, segments)
    }

    /// Create a POST request builder with authentication.
    pub fn post<S: AsRef<str>>(&self, segments: &[S]) -> RequestBuilder {
        self.request(RequestMethod::Post, segments)
    }

    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        match self.api_key {
            Some(ref key) => request.api_key_auth(key),
            None => request,
        }
    }

    /// Execute a request and return the raw response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.http.execute(request).await
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        self.http.send_json(request).await
    }

    /// Execute a request and discard the response body.
    pub async fn send(&self, request: RequestBuilder) -> Result<()> {
        self.http.execute(request).await.map(|_| ())
    }

    // =========================================================================
    // Typed JSON Methods
    // =========================================================================

    /// GET request with JSON response deserialization.
    #[instrument(skip(self, segments), fields(path = %display_path(segments)))]
    pub async fn get_json<T: DeserializeOwned, S: AsRef<str>>(&self, segments: &[S]) -> Result<T> {
        self.send_json(self.get(segments)).await
    }

    /// POST request with JSON body and response.
    #[instrument(skip(self, segments, body), fields(path = %display_path(segments)))]
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized, S: AsRef<str>>(
        &self,
        segments: &[S],
        body: &B,
    ) -> Result<T> {
        let request = self.post(segments).json(body)?;
        self.send_json(request).await
    }
}

fn display_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join("/")
}
