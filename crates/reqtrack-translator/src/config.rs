// SPDX-License-Identifier: BUSL-1.1
//! Translator client configuration.
//!
//! Host and port are supplied by the caller. Defaults point at the service
//! name used in the compose deployment. This module never reads the
//! environment; layering env vars over defaults is the binary's job.

use url::Url;

/// Service name the translator answers on inside the deployment network.
pub const DEFAULT_HOST: &str = "translator-service";

/// Port the translator listens on.
pub const DEFAULT_PORT: u16 = 8001;

/// Request timeout applied to every call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the XML-RPC endpoint on the translator service.
pub const RPC_PATH: &str = "/RPC2";

/// Configuration for connecting to the translator service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Hostname or IP address of the translator service.
    pub host: String,
    /// TCP port of the translator service.
    pub port: u16,
    /// Request timeout in seconds, fixed for the lifetime of the client.
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TranslatorConfig {
    /// Create a configuration for `host:port` with the default timeout.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Replace the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// The full XML-RPC endpoint, `http://{host}:{port}/RPC2`.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let raw = format!("http://{}:{}{}", self.host, self.port, RPC_PATH);
        Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(raw, e.to_string()))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid translator endpoint {0}: {1}")]
    InvalidUrl(String, String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
