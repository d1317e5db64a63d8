//! # hopsworks-api
//!
//! Rust client for the Hopsworks feature store.
//!
//! ## Security
//!
//! - API keys are redacted in Debug output
//! - Tracing spans skip credential parameters
//!
//! ## Crates
//!
//! - **hopsworks-client** - HTTP infrastructure: base URL, API-key auth, REST error normalization
//! - **hopsworks-feature-store** - Connections, projects, feature stores, feature groups, ingestion
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hopsworks_api::{connection, ConnectionOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = connection(ConnectionOptions::from_env()?)?;
//!
//!     for project in conn.get_projects().await? {
//!         println!("{project}");
//!     }
//!
//!     conn.close();
//!     Ok(())
//! }
//! ```

#[cfg(feature = "client")]
pub use hopsworks_client as client;
#[cfg(feature = "feature-store")]
pub use hopsworks_feature_store as feature_store;

#[cfg(feature = "client")]
pub use hopsworks_client::{ClientConfig, HopsworksClient};
#[cfg(feature = "feature-store")]
pub use hopsworks_feature_store::{
    connection, Connection, ConnectionOptions, FeatureGroup, FeatureGroupOptions, FeatureStore,
    Project, Row, WriteMode,
};
