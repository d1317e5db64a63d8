use tracing::instrument;

use crate::error::Result;
use crate::session::Session;
use crate::types::FeatureStoreData;

/// Feature store lookup within the session's project.
#[derive(Debug, Clone)]
pub struct FeatureStoreApi {
    session: Session,
}

impl FeatureStoreApi {
    /// Create a feature store API over the given session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Get the session this API sends requests with.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get a feature store by name.
    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> Result<FeatureStoreData> {
        let project = self.session.require_project()?;
        let data = self
            .session
            .client()
            .get_json(&["project", project, "featurestores", name])
            .await?;
        Ok(data)
    }
}
