//! Feature store handle.

use tracing::{info, instrument};

use crate::api::FeatureGroupApi;
use crate::error::Result;
use crate::feature_group::FeatureGroup;
use crate::session::Session;
use crate::types::{FeatureGroupOptions, FeatureStoreData, DEFAULT_FEATURE_GROUP_VERSION};

/// A project's feature store, the container for its feature groups.
#[derive(Debug, Clone)]
pub struct FeatureStore {
    data: FeatureStoreData,
    api: FeatureGroupApi,
}

impl FeatureStore {
    pub(crate) fn new(data: FeatureStoreData, session: Session) -> Self {
        let api = FeatureGroupApi::new(session, data.featurestore_id);
        Self { data, api }
    }

    pub fn id(&self) -> i64 {
        self.data.featurestore_id
    }

    pub fn name(&self) -> &str {
        &self.data.featurestore_name
    }

    pub fn project_name(&self) -> &str {
        &self.data.project_name
    }

    pub fn project_id(&self) -> i64 {
        self.data.project_id
    }

    pub fn online_enabled(&self) -> bool {
        self.data.online_enabled
    }

    /// The full server representation.
    pub fn data(&self) -> &FeatureStoreData {
        &self.data
    }

    /// Get a feature group; `version` defaults to 1.
    pub async fn get_feature_group(&self, name: &str, version: Option<u32>) -> Result<FeatureGroup> {
        let version = version.unwrap_or(DEFAULT_FEATURE_GROUP_VERSION);
        let data = self.api.get(name, version).await?;
        Ok(FeatureGroup::new(data, self.api.clone()))
    }

    /// Register a new feature group.
    pub async fn create_feature_group(
        &self,
        name: &str,
        options: FeatureGroupOptions,
    ) -> Result<FeatureGroup> {
        let data = self.api.create(name, options).await?;
        info!(name = %data.name, version = data.version, "Created feature group");
        Ok(FeatureGroup::new(data, self.api.clone()))
    }

    /// Get a feature group, creating it when it does not exist.
    ///
    /// Only a not-found lookup leads to creation; any other failure is
    /// returned unchanged. The requested `version` is carried into the
    /// create payload.
    #[instrument(skip(self, options), fields(featurestore_id = self.data.featurestore_id))]
    pub async fn get_or_create_feature_group(
        &self,
        name: &str,
        version: Option<u32>,
        options: FeatureGroupOptions,
    ) -> Result<FeatureGroup> {
        let version = version.unwrap_or(DEFAULT_FEATURE_GROUP_VERSION);
        match self.api.get(name, version).await {
            Ok(data) => Ok(FeatureGroup::new(data, self.api.clone())),
            Err(err) if err.is_not_found() => {
                info!(error = %err, "Feature group not found, creating it");
                self.create_feature_group(name, options.with_version(version))
                    .await
            }
            Err(err) => Err(err),
        }
    }
}

impl std::fmt::Display for FeatureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FeatureStore({}, id={}, project={})",
            self.data.featurestore_name, self.data.featurestore_id, self.data.project_name
        )
    }
}
