//! # hopsworks-feature-store
//!
//! Client for the Hopsworks feature store: projects, feature stores and
//! feature groups over the REST API.
//!
//! ## Features
//!
//! - **Connection** - Options from code or `HOPSWORKS_*` environment variables
//! - **Projects** - Lookup by name, listing, existence checks
//! - **Feature stores** - Default `<project>_featurestore` resolution
//! - **Feature groups** - Get, create, get-or-create by name and version
//! - **Ingestion** - Insert or upsert rows with client-side shape validation
//!
//! ## Example
//!
//! ```rust,ignore
//! use hopsworks_feature_store::{connection, ConnectionOptions, FeatureGroupOptions, WriteMode};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hopsworks_feature_store::Error> {
//!     let mut conn = connection(ConnectionOptions::from_env()?)?;
//!
//!     let project = conn.get_project(None).await?;
//!     let fs = project.get_feature_store(None).await?;
//!
//!     let fg = fs
//!         .get_or_create_feature_group(
//!             "prices",
//!             Some(1),
//!             FeatureGroupOptions::new().with_primary_key(["id"]),
//!         )
//!         .await?;
//!
//!     let row = json!({"id": 1, "price": 9.5}).as_object().cloned().unwrap_or_default();
//!     fg.insert(&[row], WriteMode::Upsert).await?;
//!
//!     conn.close();
//!     Ok(())
//! }
//! ```

pub mod api;
mod connection;
mod error;
mod feature_group;
mod feature_store;
mod project;
mod session;
mod types;

#[cfg(test)]
mod test_support;

// Connection
pub use connection::{
    connection, Connection, ConnectionOptions, ConnectionOptionsBuilder, ConnectionState,
    ENV_API_KEY, ENV_HOST, ENV_HOSTNAME_VERIFICATION, ENV_PORT, ENV_PROJECT,
};

// Domain objects
pub use feature_group::FeatureGroup;
pub use feature_store::FeatureStore;
pub use project::{Project, FEATURE_STORE_SUFFIX};

// Resource APIs
pub use api::{FeatureGroupApi, FeatureStoreApi, ProjectApi};
pub use session::Session;

// Wire types
pub use types::{
    Feature, FeatureGroupCreateRequest, FeatureGroupData, FeatureGroupOptions, FeatureStoreData,
    ItemsResponse, ProjectData, Row, WriteMode, CACHED_FEATURE_GROUP_TYPE,
    DEFAULT_FEATURE_GROUP_VERSION, HUDI_TIME_TRAVEL_FORMAT,
};

// Error types
pub use error::{Error, ErrorKind, Result};

// Re-export client types
pub use hopsworks_client::{ClientConfig, HopsworksClient};
