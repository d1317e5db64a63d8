//! Explicit request context shared by the resource APIs.

use hopsworks_client::HopsworksClient;

use crate::error::{Error, Result};

/// An HTTP client plus the project every scoped request targets.
///
/// Each resource API owns its own `Session`; scoping a session to a project
/// produces a new value instead of mutating a shared client.
#[derive(Debug, Clone)]
pub struct Session {
    client: HopsworksClient,
    project_name: Option<String>,
}

impl Session {
    /// Create a session without a project.
    pub fn new(client: HopsworksClient) -> Self {
        Self {
            client,
            project_name: None,
        }
    }

    /// Return a copy of this session scoped to `project_name`.
    pub fn with_project(&self, project_name: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            project_name: Some(project_name.into()),
        }
    }

    /// Get the HTTP client.
    pub fn client(&self) -> &HopsworksClient {
        &self.client
    }

    /// Get the project name, if one is set.
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// Get the project name or fail before any request is made.
    pub fn require_project(&self) -> Result<&str> {
        self.project_name()
            .ok_or_else(|| Error::precondition("Project name not set"))
    }
}
