use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::session::Session;
use crate::types::{ItemsResponse, ProjectData};

/// Project lookup and listing.
#[derive(Debug, Clone)]
pub struct ProjectApi {
    session: Session,
}

impl ProjectApi {
    /// Create a project API over the given session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Look up a project by name.
    ///
    /// Fails with a not-found error when the lookup returns no items.
    #[instrument(skip(self))]
    pub async fn get_project(&self, name: &str) -> Result<ProjectData> {
        let response: ItemsResponse<ProjectData> = self
            .session
            .client()
            .get_json(&["project", "getProjectInfo", name])
            .await?;

        response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found(format!("Project '{name}' not found")))
    }

    /// List all projects visible to the API key.
    #[instrument(skip(self))]
    pub async fn get_projects(&self) -> Result<Vec<ProjectData>> {
        let response: Option<ItemsResponse<ProjectData>> =
            self.session.client().get_json(&["project"]).await?;
        let projects = response.unwrap_or_default().items;
        debug!(count = projects.len(), "Listed projects");
        Ok(projects)
    }

    /// Check whether a project exists.
    ///
    /// Only an absent project maps to `Ok(false)`; transport and server
    /// failures are returned as errors.
    #[instrument(skip(self))]
    pub async fn exists(&self, name: &str) -> Result<bool> {
        match self.get_project(name).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }
}
