//! Registry configuration.

use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Default budget for a single locale-bundle lookup.
pub const DEFAULT_LOCALE_TIMEOUT: Duration = Duration::from_millis(250);

/// Errors raised while building a [`RegistryConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base authority is not a valid absolute URI.
    #[error("invalid base authority {uri:?}: {source}")]
    InvalidBaseUri {
        /// The rejected value.
        uri: String,
        /// Parse failure from the URL parser.
        #[source]
        source: url::ParseError,
    },
}

/// Node-wide configuration for descriptor resolution.
///
/// The base authority is the absolute URI prefix under which this registry
/// node publishes its elements, e.g. `https://registry/`. It is validated
/// once here; resolution itself treats it as an opaque, trusted prefix.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    base_uri: String,
    locale_timeout: Duration,
}

impl RegistryConfig {
    /// Create a configuration from an absolute base authority.
    ///
    /// A missing trailing slash is added so that identifier composition can
    /// concatenate without separators.
    pub fn new(base_uri: impl Into<String>) -> Result<Self, ConfigError> {
        let mut base_uri = base_uri.into();
        Url::parse(&base_uri).map_err(|source| ConfigError::InvalidBaseUri {
            uri: base_uri.clone(),
            source,
        })?;
        if !base_uri.ends_with('/') {
            base_uri.push('/');
        }
        Ok(Self {
            base_uri,
            locale_timeout: DEFAULT_LOCALE_TIMEOUT,
        })
    }

    /// Create a configuration from host, port, and route components.
    pub fn from_host_port(host: &str, port: u16, route: &str) -> Result<Self, ConfigError> {
        let route = route.trim_matches('/');
        if route.is_empty() {
            Self::new(format!("http://{host}:{port}/"))
        } else {
            Self::new(format!("http://{host}:{port}/{route}/"))
        }
    }

    /// Override the locale lookup budget.
    pub fn with_locale_timeout(mut self, timeout: Duration) -> Self {
        self.locale_timeout = timeout;
        self
    }

    /// The normalized base authority, always slash-terminated.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Budget for a single locale-bundle lookup.
    pub fn locale_timeout(&self) -> Duration {
        self.locale_timeout
    }
}
