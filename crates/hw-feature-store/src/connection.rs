//! Connection options, lifecycle and the `connection` factory.

use hopsworks_client::{ClientConfig, HopsworksClient, DEFAULT_PORT};
use tracing::{debug, info, instrument};

use crate::api::ProjectApi;
use crate::error::{Error, ErrorKind, Result};
use crate::project::Project;
use crate::session::Session;
use crate::types::ProjectData;

/// Environment variable holding the cluster host name.
pub const ENV_HOST: &str = "HOPSWORKS_HOST";
/// Environment variable holding the port.
pub const ENV_PORT: &str = "HOPSWORKS_PORT";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "HOPSWORKS_API_KEY";
/// Environment variable holding the default project.
pub const ENV_PROJECT: &str = "HOPSWORKS_PROJECT";
/// Environment variable toggling TLS hostname verification.
pub const ENV_HOSTNAME_VERIFICATION: &str = "HOPSWORKS_HOSTNAME_VERIFICATION";

/// Settings for a [`Connection`].
#[derive(Clone)]
pub struct ConnectionOptions {
    pub host: String,
    pub port: u16,
    pub api_key: Option<String>,
    pub hostname_verification: bool,
    pub project: Option<String>,
}

impl std::fmt::Debug for ConnectionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionOptions")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("hostname_verification", &self.hostname_verification)
            .field("project", &self.project)
            .finish()
    }
}

impl ConnectionOptions {
    /// Options for `host` with every other setting at its default.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            api_key: None,
            hostname_verification: true,
            project: None,
        }
    }

    /// Start building options for `host`.
    pub fn builder(host: impl Into<String>) -> ConnectionOptionsBuilder {
        ConnectionOptionsBuilder {
            options: Self::new(host),
        }
    }

    /// Read options from the `HOPSWORKS_*` environment variables.
    ///
    /// `HOPSWORKS_HOST` is required. `HOPSWORKS_HOSTNAME_VERIFICATION`
    /// accepts `true`, `1`, `y` or `yes` in any case; anything else
    /// disables verification.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup(ENV_HOST)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::new(ErrorKind::Config(format!("{ENV_HOST} is not set"))))?;

        let mut options = Self::new(host);
        if let Some(port) = lookup(ENV_PORT) {
            options.port = port.trim().parse().map_err(|_| {
                Error::new(ErrorKind::Config(format!(
                    "{ENV_PORT} is not a valid port: {port}"
                )))
            })?;
        }
        options.api_key = lookup(ENV_API_KEY).filter(|k| !k.is_empty());
        options.project = lookup(ENV_PROJECT).filter(|p| !p.is_empty());
        if let Some(flag) = lookup(ENV_HOSTNAME_VERIFICATION) {
            options.hostname_verification = is_truthy(&flag);
        }
        Ok(options)
    }

    fn client_config(&self) -> ClientConfig {
        let mut builder = ClientConfig::builder(self.host.clone())
            .with_port(self.port)
            .with_hostname_verification(self.hostname_verification);
        if let Some(key) = &self.api_key {
            builder = builder.with_api_key(key.clone());
        }
        builder.build()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "y" | "yes"
    )
}

/// Builder for [`ConnectionOptions`].
#[derive(Debug, Clone)]
pub struct ConnectionOptionsBuilder {
    options: ConnectionOptions,
}

impl ConnectionOptionsBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.options.port = port;
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.options.api_key = Some(api_key.into());
        self
    }

    pub fn hostname_verification(mut self, enabled: bool) -> Self {
        self.options.hostname_verification = enabled;
        self
    }

    /// Project used when `get_project` is called without a name.
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.options.project = Some(project.into());
        self
    }

    pub fn build(self) -> ConnectionOptions {
        self.options
    }
}

/// Lifecycle of a [`Connection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Uninitialized,
    Connected,
    Closed,
}

/// Entry point to a Hopsworks cluster.
#[derive(Debug)]
pub struct Connection {
    options: ConnectionOptions,
    session: Session,
    state: ConnectionState,
}

impl Connection {
    /// Build a connection without connecting it.
    pub fn new(options: ConnectionOptions) -> Result<Self> {
        let client = HopsworksClient::new(options.client_config())?;
        Ok(Self {
            options,
            session: Session::new(client),
            state: ConnectionState::Uninitialized,
        })
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn options(&self) -> &ConnectionOptions {
        &self.options
    }

    /// The session requests are sent with.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mark the connection as connected and scope the session to the
    /// default project, if any. Calling it again has no effect.
    pub fn connect(&mut self) {
        if self.state == ConnectionState::Connected {
            return;
        }
        if let Some(project) = &self.options.project {
            self.session = self.session.with_project(project.clone());
        }
        self.state = ConnectionState::Connected;
        info!(
            url = self.session.client().base_url(),
            project = ?self.options.project,
            "Connected"
        );
    }

    /// Get a project; `name` defaults to the connection's project.
    #[instrument(skip(self))]
    pub async fn get_project(&mut self, name: Option<&str>) -> Result<Project> {
        self.connect();
        let name = name
            .or(self.options.project.as_deref())
            .ok_or_else(|| {
                Error::precondition("No project name given and no default project configured")
            })?
            .to_owned();
        let data = self.project_api().get_project(&name).await?;
        Ok(Project::new(data, &self.session))
    }

    /// List every project visible to the API key.
    pub async fn get_projects(&mut self) -> Result<Vec<Project>> {
        self.connect();
        let projects: Vec<ProjectData> = self.project_api().get_projects().await?;
        Ok(projects
            .into_iter()
            .map(|data| Project::new(data, &self.session))
            .collect())
    }

    /// Check whether a project exists.
    pub async fn project_exists(&mut self, name: &str) -> Result<bool> {
        self.connect();
        self.project_api().exists(name).await
    }

    /// Close the connection. A later call to any operation reconnects.
    pub fn close(&mut self) {
        if self.state != ConnectionState::Closed {
            debug!("Closing connection");
            self.state = ConnectionState::Closed;
        }
    }

    fn project_api(&self) -> ProjectApi {
        ProjectApi::new(self.session.clone())
    }
}

/// Build a connection from `options` and connect it.
pub fn connection(options: ConnectionOptions) -> Result<Connection> {
    let mut connection = Connection::new(options)?;
    connection.connect();
    Ok(connection)
}
