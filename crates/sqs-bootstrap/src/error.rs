//! Error types for session bootstrap and attribute construction.

use aws_credential_types::provider::error::CredentialsError;
use thiserror::Error;

/// Top-level error for everything this crate can report
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Attribute error: {0}")]
    Attribute(#[from] AttributeError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Errors raised while turning a [`Config`](crate::Config) into a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// A credential variable required for local development is unset.
    ///
    /// Continuing would produce unauthenticated requests, so callers are
    /// expected to stop the process when they see this.
    #[error("{variable} is not set")]
    MissingCredentialVariable { variable: String },

    #[error("Invalid credentials: {source}")]
    InvalidCredentials {
        #[source]
        source: CredentialsError,
    },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl SessionError {
    /// Check if the error reflects a deployment misconfiguration that must
    /// halt the process rather than be handled at runtime
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::MissingCredentialVariable { .. } => true,
            Self::InvalidCredentials { .. } => false,
            Self::Configuration(_) => false,
        }
    }
}

/// Errors raised by the custom attribute builder
#[derive(Debug, Error)]
pub enum AttributeError {
    /// The value supplied does not match the declared data type.
    #[error("Failed to marshal attribute '{title}': expected {expected}, got {actual}")]
    Marshal {
        title: String,
        expected: String,
        actual: String,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {key}")]
    Missing { key: String },

    #[error("Configuration loading failed: {0}")]
    Load(#[from] ::config::ConfigError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
