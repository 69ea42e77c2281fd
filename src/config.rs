//! Client configuration resolved from the process environment.

use std::env;
use std::fmt;

use crate::error::ConfigError;

// ============================================================================
// Environment variables
// ============================================================================

/// API key for the Azure OpenAI resource.
pub const ENV_API_KEY: &str = "AZURE_OPENAI_API_KEY";
/// Base URL of the Azure OpenAI resource.
pub const ENV_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
/// API version string sent with every request.
pub const ENV_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";
/// Name of the model deployment requests are routed to.
pub const ENV_DEPLOYMENT: &str = "AZURE_OPENAI_DEPLOYMENT";

/// Load environment variables from a `.env` file in the working directory.
///
/// This is an explicit composition-root step: call it before
/// [`ClientConfig::from_env`] when credentials live in a `.env` file.
/// A missing file is not an error, and variables already present in the
/// process environment are never overridden.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(%err, "failed to load .env file"),
    }
}

// ============================================================================
// ClientConfig
// ============================================================================

/// Connection settings for one Azure OpenAI resource.
///
/// All four values are required and carried verbatim; presence is the only
/// validation performed.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub endpoint: String,
    pub api_version: String,
    pub deployment: String,
}

impl ClientConfig {
    /// Load the `.env` file (if any), then resolve configuration from the
    /// process environment.
    pub fn init() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_env()
    }

    /// Resolve configuration from the process environment.
    ///
    /// Fails with [`ConfigError::MissingVar`] naming the first absent
    /// variable. No defaults are applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| get(name).ok_or(ConfigError::MissingVar(name));
        Ok(Self {
            api_key: require(ENV_API_KEY)?,
            endpoint: require(ENV_ENDPOINT)?,
            api_version: require(ENV_API_VERSION)?,
            deployment: require(ENV_DEPLOYMENT)?,
        })
    }

    /// First four characters of the API key followed by `****`, for safe
    /// display and logging.
    pub fn masked_api_key(&self) -> String {
        if self.api_key.len() > 4 {
            format!("{}****", &self.api_key[..4])
        } else {
            "****".to_string()
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.masked_api_key())
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("deployment", &self.deployment)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
