//! HTTP response handling with REST error normalization.

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// The URL the response came from.
    pub fn url(&self) -> &str {
        self.inner.url().as_str()
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    ///
    /// An empty body deserializes as JSON `null`, so `()` and `Option<T>`
    /// targets accept 204-style responses.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.inner.bytes().await?;
        if body.is_empty() {
            return serde_json::from_value(serde_json::Value::Null).map_err(Into::into);
        }
        serde_json::from_slice(&body).map_err(Into::into)
    }
}

/// Extension trait for processing Hopsworks API responses.
pub trait ResponseExt {
    /// Turn a non-2xx response into a [`ErrorKind::RestApi`] error.
    fn check_rest_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_rest_error(self) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }

        let url = self.url().to_string();
        let status = self.inner.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = self.text().await.unwrap_or_default();

        Err(Error::new(ErrorKind::RestApi {
            url,
            status: status.as_u16(),
            status_text,
            body,
        }))
    }
}
