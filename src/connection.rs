//! Azure OpenAI connection handle.

use std::fmt;

use async_openai::Client;
use async_openai::config::AzureConfig;

use crate::config::ClientConfig;
use crate::error::ConfigError;

/// A ready-to-use Azure OpenAI client paired with the deployment it targets.
///
/// Credentials are bound once at construction and never change afterwards.
/// Cloning is cheap and clones are independent, so a `Connection` can be
/// handed to any number of callers.
#[derive(Clone)]
pub struct Connection {
    client: Client<AzureConfig>,
    config: ClientConfig,
}

impl Connection {
    /// Build a connection from an already-resolved configuration.
    ///
    /// This is local object setup only; no request leaves the process until
    /// a caller issues one through [`client`](Self::client).
    pub fn new(config: ClientConfig) -> Self {
        let azure = AzureConfig::new()
            .with_api_key(config.api_key.clone())
            .with_api_base(config.endpoint.clone())
            .with_api_version(config.api_version.clone())
            .with_deployment_id(config.deployment.clone());

        tracing::info!(
            endpoint = %config.endpoint,
            api_version = %config.api_version,
            deployment = %config.deployment,
            "initialized Azure OpenAI client"
        );

        Self {
            client: Client::with_config(azure),
            config,
        }
    }

    /// Resolve configuration from the process environment and connect.
    ///
    /// Fails with [`ConfigError::MissingVar`] when any required variable is
    /// absent; no client handle is constructed in that case.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// The underlying SDK client, bound to (key, endpoint, API version).
    pub fn client(&self) -> &Client<AzureConfig> {
        &self.client
    }

    /// Name of the model deployment requests should target.
    pub fn deployment(&self) -> &str {
        &self.config.deployment
    }

    /// The configuration this connection was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use async_openai::config::Config as _;

    use super::*;
    use crate::config::{ENV_API_KEY, ENV_API_VERSION, ENV_DEPLOYMENT, ENV_ENDPOINT};

    fn test_config() -> ClientConfig {
        ClientConfig {
            api_key: "abc".to_string(),
            endpoint: "https://x.test".to_string(),
            api_version: "2024-01-01".to_string(),
            deployment: "gpt-x".to_string(),
        }
    }

    #[test]
    fn test_binds_endpoint_and_deployment() {
        let conn = Connection::new(test_config());
        assert_eq!(conn.client().config().api_base(), "https://x.test");
        assert_eq!(conn.deployment(), "gpt-x");
    }

    #[test]
    fn test_reconstruction_binds_same_configuration() {
        let a = Connection::new(test_config());
        let b = Connection::new(test_config());
        assert_eq!(
            a.client().config().api_base(),
            b.client().config().api_base()
        );
        assert_eq!(a.deployment(), b.deployment());
    }

    #[test]
    fn test_clone_shares_configuration() {
        let conn = Connection::new(test_config());
        let clone = conn.clone();
        assert_eq!(clone.deployment(), conn.deployment());
        assert_eq!(clone.config().endpoint, conn.config().endpoint);
    }

    #[test]
    fn test_debug_does_not_leak_api_key() {
        let mut config = test_config();
        config.api_key = "secret_key_12345".to_string();
        let conn = Connection::new(config);
        let debug = format!("{conn:?}");
        assert!(!debug.contains("secret_key_12345"));
    }

    #[test]
    fn test_from_env_constructs() {
        temp_env::with_vars(
            [
                (ENV_API_KEY, Some("abc")),
                (ENV_ENDPOINT, Some("https://x.test")),
                (ENV_API_VERSION, Some("2024-01-01")),
                (ENV_DEPLOYMENT, Some("gpt-x")),
            ],
            || {
                let conn = Connection::from_env().unwrap();
                assert_eq!(conn.deployment(), "gpt-x");
            },
        );
    }

    #[test]
    fn test_from_env_missing_configuration() {
        temp_env::with_vars(
            [
                (ENV_API_KEY, None::<&str>),
                (ENV_ENDPOINT, None),
                (ENV_API_VERSION, None),
                (ENV_DEPLOYMENT, None),
            ],
            || {
                assert!(Connection::from_env().is_err());
            },
        );
    }
}
