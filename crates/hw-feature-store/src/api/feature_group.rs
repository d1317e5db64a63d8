use tracing::{debug, instrument};

use crate::error::Result;
use crate::session::Session;
use crate::types::{
    FeatureGroupCreateRequest, FeatureGroupData, FeatureGroupOptions, IngestionRequest, Row,
    WriteMode,
};

/// Feature group operations within one feature store.
///
/// Every call requires the session to carry a project name.
#[derive(Debug, Clone)]
pub struct FeatureGroupApi {
    session: Session,
    featurestore_id: i64,
}

impl FeatureGroupApi {
    /// Create a feature group API for the given feature store.
    pub fn new(session: Session, featurestore_id: i64) -> Self {
        Self {
            session,
            featurestore_id,
        }
    }

    /// Get the id of the feature store this API is scoped to.
    pub fn featurestore_id(&self) -> i64 {
        self.featurestore_id
    }

    /// Get the session this API sends requests with.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn featuregroups_path<'a>(&'a self, project: &'a str, fs_id: &'a str) -> Vec<&'a str> {
        vec!["project", project, "featurestores", fs_id, "featuregroups"]
    }

    /// Get a feature group by name and version.
    #[instrument(skip(self), fields(featurestore_id = self.featurestore_id))]
    pub async fn get(&self, name: &str, version: u32) -> Result<FeatureGroupData> {
        let project = self.session.require_project()?;
        let fs_id = self.featurestore_id.to_string();

        let mut segments = self.featuregroups_path(project, &fs_id);
        segments.push(name);

        let client = self.session.client();
        let data = client
            .send_json(client.get(&segments).query("version", version))
            .await?;
        Ok(data)
    }

    /// Register a new feature group.
    ///
    /// Only metadata is created; rows are written with [`insert_data`].
    ///
    /// [`insert_data`]: Self::insert_data
    #[instrument(skip(self, options), fields(featurestore_id = self.featurestore_id))]
    pub async fn create(&self, name: &str, options: FeatureGroupOptions) -> Result<FeatureGroupData> {
        let project = self.session.require_project()?;
        let fs_id = self.featurestore_id.to_string();
        let segments = self.featuregroups_path(project, &fs_id);

        let payload = FeatureGroupCreateRequest::new(name, options);
        let data: FeatureGroupData = self.session.client().post_json(&segments, &payload).await?;
        debug!(id = data.id, version = data.version, "Created feature group");
        Ok(data)
    }

    /// Write rows into a feature group.
    #[instrument(skip(self, rows), fields(featurestore_id = self.featurestore_id, rows = rows.len()))]
    pub async fn insert_data(
        &self,
        feature_group_id: i64,
        rows: &[Row],
        mode: WriteMode,
    ) -> Result<()> {
        let project = self.session.require_project()?;
        let fs_id = self.featurestore_id.to_string();
        let fg_id = feature_group_id.to_string();

        let mut segments = self.featuregroups_path(project, &fs_id);
        segments.push(&fg_id);
        segments.push("ingestion");

        let client = self.session.client();
        let request = client
            .post(&segments)
            .query("write", mode.as_str())
            .json(&IngestionRequest { items: rows })?;
        client.send(request).await?;
        Ok(())
    }
}
