//! Project handle.

use crate::api::FeatureStoreApi;
use crate::error::Result;
use crate::feature_store::FeatureStore;
use crate::session::Session;
use crate::types::ProjectData;

/// Suffix of a project's default feature store name.
pub const FEATURE_STORE_SUFFIX: &str = "_featurestore";

/// A Hopsworks project.
///
/// Every request made through a `Project` is scoped to the project's own
/// name, regardless of the connection's default project.
#[derive(Debug, Clone)]
pub struct Project {
    data: ProjectData,
    api: FeatureStoreApi,
}

impl Project {
    pub(crate) fn new(data: ProjectData, session: &Session) -> Self {
        let api = FeatureStoreApi::new(session.with_project(data.project_name.clone()));
        Self { data, api }
    }

    pub fn id(&self) -> i64 {
        self.data.project_id
    }

    pub fn name(&self) -> &str {
        &self.data.project_name
    }

    pub fn owner(&self) -> &str {
        &self.data.owner
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    /// Creation timestamp as sent by the server.
    pub fn created(&self) -> Option<&str> {
        self.data.created.as_deref()
    }

    pub fn data(&self) -> &ProjectData {
        &self.data
    }

    /// Name of this project's default feature store.
    pub fn default_feature_store_name(&self) -> String {
        format!("{}{FEATURE_STORE_SUFFIX}", self.data.project_name)
    }

    /// Get a feature store; `name` defaults to `<project>_featurestore`.
    pub async fn get_feature_store(&self, name: Option<&str>) -> Result<FeatureStore> {
        let name = name
            .map(str::to_owned)
            .unwrap_or_else(|| self.default_feature_store_name());
        let data = self.api.get(&name).await?;
        Ok(FeatureStore::new(data, self.api.session().clone()))
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Project({}, {}", self.data.project_name, self.data.owner)?;
        if let Some(description) = &self.data.description {
            write!(f, ", {description}")?;
        }
        f.write_str(")")
    }
}
