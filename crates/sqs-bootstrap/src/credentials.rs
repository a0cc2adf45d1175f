//! Explicit credentials for local development against the real service.
//!
//! Outside production and staging, and without the local emulator flag, the
//! access key pair is taken from the standard AWS variables and checked
//! before any session is built.

use crate::environment::EnvironmentSource;
use crate::error::SessionError;
use async_trait::async_trait;
use aws_credential_types::provider::error::CredentialsError;
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::Credentials;

pub const ACCESS_KEY_VARIABLE: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_KEY_VARIABLE: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN_VARIABLE: &str = "AWS_SESSION_TOKEN";

/// Provider name recorded on credentials built here
pub const PROVIDER_NAME: &str = "sqs-bootstrap-env";

/// Build static credentials from the environment.
///
/// The session token is optional; an unset or empty token means none.
///
/// # Errors
///
/// Returns [`SessionError::MissingCredentialVariable`] if the access key or
/// secret key variable is unset or empty.
pub fn credentials_from_env(env: &dyn EnvironmentSource) -> Result<Credentials, SessionError> {
    let access_key = required_var(env, ACCESS_KEY_VARIABLE)?;
    let secret_key = required_var(env, SECRET_KEY_VARIABLE)?;
    let session_token = env
        .var(SESSION_TOKEN_VARIABLE)
        .filter(|token| !token.is_empty());

    Ok(Credentials::new(
        access_key,
        secret_key,
        session_token,
        None,
        PROVIDER_NAME,
    ))
}

fn required_var(env: &dyn EnvironmentSource, key: &str) -> Result<String, SessionError> {
    env.var(key)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| SessionError::MissingCredentialVariable {
            variable: key.to_string(),
        })
}

/// Checks that resolved credentials are usable before a session is built
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    async fn validate(&self, credentials: &Credentials) -> Result<(), CredentialsError>;
}

/// Resolves the credentials through the SDK provider interface and rejects
/// an empty key pair
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderCredentialValidator;

#[async_trait]
impl CredentialValidator for ProviderCredentialValidator {
    async fn validate(&self, credentials: &Credentials) -> Result<(), CredentialsError> {
        let resolved = credentials.provide_credentials().await?;

        if resolved.access_key_id().is_empty() || resolved.secret_access_key().is_empty() {
            return Err(CredentialsError::invalid_configuration(
                "static credentials are empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
