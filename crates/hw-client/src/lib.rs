//! # hopsworks-client
//!
//! Core HTTP client infrastructure for the Hopsworks REST API.
//!
//! This crate provides the foundational HTTP client with:
//! - Base URL derivation from host and port (443 means `https`)
//! - `Authorization: ApiKey <key>` on every request when a key is configured
//! - Normalization of non-2xx responses into a typed REST error
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (hopsworks-feature-store: projects, feature groups)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   HopsworksClient                           │
//! │  - Holds base URL + API key + HTTP client                   │
//! │  - Joins path segments under /hopsworks-api/api             │
//! │  - Provides typed JSON methods (get_json, post_json, etc.)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HttpClient                               │
//! │  - Raw HTTP over reqwest, TLS verification toggle           │
//! │  - REST error normalization                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use hopsworks_client::{ClientConfig, HopsworksClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hopsworks_client::Error> {
//!     let config = ClientConfig::builder("my-instance.cloud.hopsworks.ai")
//!         .with_api_key("secret")
//!         .build();
//!     let client = HopsworksClient::new(config)?;
//!
//!     let projects: serde_json::Value = client.get_json(&["project"]).await?;
//!     println!("{projects}");
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod hopsworks_client;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{truncate_body, Error, ErrorKind, Result};
pub use hopsworks_client::HopsworksClient;
pub use request::{RequestBuilder, RequestMethod};
pub use response::{Response, ResponseExt};

/// Path segments every API request is nested under.
pub const API_BASE_PATH: [&str; 2] = ["hopsworks-api", "api"];

/// Port that selects the `https` scheme.
pub const DEFAULT_PORT: u16 = 443;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("hopsworks-api/", env!("CARGO_PKG_VERSION"));
