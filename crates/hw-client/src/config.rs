//! Client configuration.

use crate::DEFAULT_PORT;

/// Configuration for the Hopsworks HTTP client.
///
/// The API key is redacted in Debug output.
#[derive(Clone)]
pub struct ClientConfig {
    /// Hopsworks hostname, without scheme.
    pub host: String,
    /// Port; 443 selects `https`, anything else `http`.
    pub port: u16,
    /// API key sent as `Authorization: ApiKey <key>`.
    pub api_key: Option<String>,
    /// Verify the server certificate and hostname.
    pub hostname_verification: bool,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("hostname_verification", &self.hostname_verification)
            .field("user_agent", &self.user_agent)
            .field("enable_tracing", &self.enable_tracing)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config for the given host with default settings.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            api_key: None,
            hostname_verification: true,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }

    /// Create a new client config builder.
    pub fn builder(host: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(host),
        }
    }

    /// URL scheme implied by the port.
    pub fn scheme(&self) -> &'static str {
        if self.port == DEFAULT_PORT {
            "https"
        } else {
            "http"
        }
    }

    /// Base URL of the Hopsworks instance, e.g. `https://host:443`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme(), self.host, self.port)
    }
}

/// Builder for ClientConfig.
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Enable or disable certificate and hostname verification.
    pub fn with_hostname_verification(mut self, enabled: bool) -> Self {
        self.config.hostname_verification = enabled;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
