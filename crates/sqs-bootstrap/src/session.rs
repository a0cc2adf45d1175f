//! Session construction.
//!
//! A session bundles region, endpoint, credentials and retry settings for
//! the SQS/SNS clients. How it is built depends on the deployment tier and
//! the `local` flag of the [`Config`]:
//!
//! | Tier | `local` | Mode | Credentials | Endpoint |
//! |------|---------|------|-------------|----------|
//! | production, staging | any | [`SessionMode::Hosted`] | hosting environment | SDK default |
//! | anything else | `true` | [`SessionMode::LocalEmulator`] | SDK default chain | `http://localhost:4566` |
//! | anything else | `false` | [`SessionMode::LocalWithCredentials`] | `AWS_*` variables, validated | `hostname` if set |
//!
//! ## Example
//!
//! ```no_run
//! use sqs_bootstrap::{Config, SessionFactory};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new("us-east-1").with_local(true);
//! let session = SessionFactory::new().new_session(&config).await?;
//! let client = session.sqs_client();
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::credentials::{credentials_from_env, CredentialValidator, ProviderCredentialValidator};
use crate::environment::{EnvironmentSource, ProcessEnvironment, Tier};
use crate::error::{ConfigurationError, SessionError};
use crate::retry::{retry_config_for, HOSTED_MAX_RETRIES};
use aws_config::{BehaviorVersion, ConfigLoader, Region, SdkConfig};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

/// Endpoint of the local service emulator
pub const LOCAL_EMULATOR_ENDPOINT: &str = "http://localhost:4566";

/// How a session obtains its endpoint and credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Production or staging: region only, credentials from the host
    Hosted,
    /// Local tier with the emulator flag set
    LocalEmulator,
    /// Local tier talking to the real service (or a mock at `hostname`)
    /// with credentials from the environment
    LocalWithCredentials,
}

impl SessionMode {
    /// Pick the mode for a tier and the config's `local` flag
    pub fn select(tier: Tier, local: bool) -> Self {
        match (tier, local) {
            (Tier::NonLocal, _) => Self::Hosted,
            (Tier::Local, true) => Self::LocalEmulator,
            (Tier::Local, false) => Self::LocalWithCredentials,
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hosted => write!(f, "hosted"),
            Self::LocalEmulator => write!(f, "local-emulator"),
            Self::LocalWithCredentials => write!(f, "local-with-credentials"),
        }
    }
}

/// Ready-to-use client session.
///
/// Owned by the caller; nothing is shared with the factory after
/// construction.
#[derive(Debug, Clone)]
pub struct Session {
    sdk_config: SdkConfig,
    mode: SessionMode,
    endpoint: Option<String>,
    max_retries: Option<u32>,
}

impl Session {
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn region(&self) -> Option<&str> {
        self.sdk_config.region().map(|r| r.as_ref())
    }

    /// Endpoint override, `None` when the SDK resolves the endpoint
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Retry ceiling applied to requests, `None` when the SDK default is used
    pub fn max_retries(&self) -> Option<u32> {
        self.max_retries
    }

    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }

    pub fn into_sdk_config(self) -> SdkConfig {
        self.sdk_config
    }

    /// Create an SQS client bound to this session
    pub fn sqs_client(&self) -> aws_sdk_sqs::Client {
        aws_sdk_sqs::Client::new(&self.sdk_config)
    }
}

/// Builds sessions from a [`Config`].
///
/// Environment reads and credential validation are injected so that every
/// branch can be driven without touching the process environment or the
/// network.
#[derive(Clone)]
pub struct SessionFactory {
    env: Arc<dyn EnvironmentSource>,
    validator: Arc<dyn CredentialValidator>,
}

impl Default for SessionFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionFactory").finish_non_exhaustive()
    }
}

impl SessionFactory {
    /// Factory reading the process environment and validating credentials
    /// through the SDK provider interface
    pub fn new() -> Self {
        Self {
            env: Arc::new(ProcessEnvironment),
            validator: Arc::new(ProviderCredentialValidator),
        }
    }

    pub fn with_environment(mut self, env: Arc<dyn EnvironmentSource>) -> Self {
        self.env = env;
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn CredentialValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn environment(&self) -> &dyn EnvironmentSource {
        self.env.as_ref()
    }

    /// Tier of the current environment
    pub fn tier(&self) -> Tier {
        Tier::detect(self.env.as_ref())
    }

    /// Mode [`SessionFactory::new_session`] would use for `config`
    pub fn plan(&self, config: &Config) -> SessionMode {
        SessionMode::select(self.tier(), config.local)
    }

    /// Build a session for `config`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Configuration`] if the region is empty or the
    ///   endpoint override is not a URL
    /// - [`SessionError::MissingCredentialVariable`] if a required
    ///   credential variable is unset; callers should treat this as fatal
    /// - [`SessionError::InvalidCredentials`] if credential validation fails
    pub async fn new_session(&self, config: &Config) -> Result<Session, SessionError> {
        if config.region.trim().is_empty() {
            return Err(ConfigurationError::Missing {
                key: "region".to_string(),
            }
            .into());
        }

        let mode = self.plan(config);
        debug!(%mode, region = %config.region, "Selected session mode");

        let session = match mode {
            SessionMode::Hosted => self.hosted_session(config).await,
            SessionMode::LocalEmulator => self.emulator_session(config).await,
            SessionMode::LocalWithCredentials => self.credentialed_session(config).await?,
        };

        info!(
            mode = %session.mode,
            region = %config.region,
            endpoint = session.endpoint().unwrap_or("default"),
            max_retries = ?session.max_retries,
            "Session created"
        );

        Ok(session)
    }

    async fn hosted_session(&self, config: &Config) -> Session {
        let sdk_config = base_loader(config)
            .retry_config(retry_config_for(HOSTED_MAX_RETRIES))
            .load()
            .await;

        Session {
            sdk_config,
            mode: SessionMode::Hosted,
            endpoint: None,
            max_retries: Some(HOSTED_MAX_RETRIES),
        }
    }

    async fn emulator_session(&self, config: &Config) -> Session {
        let sdk_config = base_loader(config)
            .endpoint_url(LOCAL_EMULATOR_ENDPOINT)
            .load()
            .await;

        Session {
            sdk_config,
            mode: SessionMode::LocalEmulator,
            endpoint: Some(LOCAL_EMULATOR_ENDPOINT.to_string()),
            max_retries: None,
        }
    }

    async fn credentialed_session(&self, config: &Config) -> Result<Session, SessionError> {
        let credentials = credentials_from_env(self.env.as_ref())?;

        self.validator
            .validate(&credentials)
            .await
            .map_err(|source| SessionError::InvalidCredentials { source })?;

        let policy = config.retry_policy();
        let mut loader = base_loader(config)
            .credentials_provider(credentials)
            .retry_config(policy.to_retry_config());

        let endpoint = config.endpoint_url()?;
        if let Some(endpoint) = &endpoint {
            loader = loader.endpoint_url(endpoint.as_str());
        }

        Ok(Session {
            sdk_config: loader.load().await,
            mode: SessionMode::LocalWithCredentials,
            endpoint,
            max_retries: Some(policy.max_retries()),
        })
    }
}

fn base_loader(config: &Config) -> ConfigLoader {
    aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()))
}
