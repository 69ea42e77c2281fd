//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while resolving the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_display() {
        let err = ConfigError::MissingVar("AZURE_OPENAI_ENDPOINT");
        assert!(err.to_string().contains("AZURE_OPENAI_ENDPOINT"));
    }
}
