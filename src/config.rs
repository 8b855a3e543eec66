//! Client configuration
//!
//! Settings can come from a YAML (or JSON) file, from `MCD_*` environment
//! variables, or be set directly through the builder. Environment values
//! override file values.

use crate::error::{Error, Result};
use crate::transport::Credentials;
use crate::types::OptionStringExt;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Monte Carlo GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.getmontecarlo.com/graphql";

/// Environment variable holding the API key id
pub const ENV_API_ID: &str = "MCD_DEFAULT_API_ID";

/// Environment variable holding the API key token
pub const ENV_API_TOKEN: &str = "MCD_DEFAULT_API_TOKEN";

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "MCD_API_ENDPOINT";

/// Environment variable setting a request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "MCD_TIMEOUT_SECS";

/// Configuration for a [`MonteCarloClient`](crate::MonteCarloClient)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// GraphQL endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key id
    #[serde(default)]
    pub api_key_id: String,

    /// API key token
    #[serde(default)]
    pub api_key_token: String,

    /// Timeout applied to every request; none by default
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    format!("montecarlo-client/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key_id: String::new(),
            api_key_token: String::new(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load config from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse config from a YAML or JSON string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load config from the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Override fields with any non-empty `MCD_*` values returned by `lookup`
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup(ENV_API_ID).none_if_empty() {
            self.api_key_id = id;
        }
        if let Some(token) = lookup(ENV_API_TOKEN).none_if_empty() {
            self.api_key_token = token;
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT).none_if_empty() {
            self.endpoint = endpoint;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS).none_if_empty() {
            let secs = timeout.parse().map_err(|_| {
                Error::config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{timeout}'"))
            })?;
            self.timeout_secs = Some(secs);
        }
        Ok(self)
    }

    /// Check that credentials are present and the endpoint is a URL
    pub fn validate(&self) -> Result<()> {
        if self.api_key_id.is_empty() {
            return Err(Error::missing_field("api_key_id"));
        }
        if self.api_key_token.is_empty() {
            return Err(Error::missing_field("api_key_token"));
        }
        self.endpoint_url()?;
        Ok(())
    }

    /// Parsed endpoint
    pub fn endpoint_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.endpoint)?)
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Credential pair for the transport
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.api_key_id, &self.api_key_token)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key_id", &self.api_key_id)
            .field("api_key_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the API key pair
    pub fn credentials(mut self, api_key_id: impl Into<String>, api_key_token: impl Into<String>) -> Self {
        self.config.api_key_id = api_key_id.into();
        self.config.api_key_token = api_key_token.into();
        self
    }

    /// Set the request timeout, rounded up to whole seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self.config.timeout_secs = Some(secs);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
