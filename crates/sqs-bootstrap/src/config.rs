//! Client configuration.
//!
//! A [`Config`] is built by the caller, optionally extended with custom
//! attributes, and handed to [`SessionFactory`](crate::SessionFactory).
//! Only `region`, `hostname`, `local` and `retry_count` are interpreted by
//! this crate; the remaining fields are carried for the publish and consume
//! components.

use crate::attributes::{AttributeValue, CustomAttribute, DataType};
use crate::error::{AttributeError, ConfigurationError};
use crate::logging::{Logger, TracingLogger};
use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Prefix of environment variables read by [`Config::load`]
pub const CONFIG_ENV_PREFIX: &str = "SQS";

/// Visibility timeout extensions applied when none are configured
pub const DEFAULT_EXTENSION_LIMIT: u32 = 2;

/// Messaging client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Region of the queue service, required for session creation
    pub region: String,

    /// Endpoint override for emulators or mock servers
    pub hostname: Option<String>,

    /// Account id used to build the topic ARN
    pub account_id: String,

    /// Environment name used to build the topic ARN
    pub env: String,

    /// Prefix placed before the environment in the topic name
    pub topic_prefix: String,

    /// Topic address; derived from the fields above when empty
    pub topic_arn: String,

    /// Queue address; looked up during setup when empty
    pub queue_url: String,

    /// Seconds a received message stays hidden from other consumers
    pub visibility_timeout: u32,

    /// Exponential backoff retries before an error is reported
    pub retry_count: i32,

    /// Number of messages processed concurrently by the consumer
    pub worker_pool: u32,

    /// Number of visibility timeout extensions; each one doubles the
    /// timeout. `Some(0)` disables extension.
    pub extension_limit: Option<u32>,

    /// Point the session at the local emulator
    pub local: bool,

    /// Attributes attached to every outgoing message, in insertion order
    #[serde(skip_deserializing)]
    pub attributes: Vec<CustomAttribute>,

    #[serde(skip, default = "default_logger")]
    pub logger: Arc<dyn Logger>,
}

fn default_logger() -> Arc<dyn Logger> {
    Arc::new(TracingLogger)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: String::new(),
            hostname: None,
            account_id: String::new(),
            env: String::new(),
            topic_prefix: String::new(),
            topic_arn: String::new(),
            queue_url: String::new(),
            visibility_timeout: 0,
            retry_count: 0,
            worker_pool: 0,
            extension_limit: None,
            local: false,
            attributes: Vec::new(),
            logger: default_logger(),
        }
    }
}

impl Config {
    /// Create a configuration for a region with every other field defaulted
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }

    /// Load configuration from an optional file and `SQS__*` environment
    /// variables, the latter taking precedence.
    ///
    /// The file format is inferred from its extension (YAML, TOML or JSON).
    /// Environment keys use `__` as separator, e.g. `SQS__RETRY_COUNT=5`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a value has
    /// the wrong type, or the result fails [`Config::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "Loading configuration file");
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let raw = builder
            .add_source(::config::Environment::with_prefix(CONFIG_ENV_PREFIX).separator("__"))
            .build()?;

        let config: Config = raw.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate fields this crate depends on
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.region.trim().is_empty() {
            return Err(ConfigurationError::Missing {
                key: "region".to_string(),
            });
        }

        self.endpoint_url()?;

        Ok(())
    }

    /// Endpoint override as a URL, if any.
    ///
    /// A bare host (`sqs.example.test`, `localhost:4566`) is given an
    /// `https://` scheme. The result must use `http` or `https` and name a
    /// host.
    pub fn endpoint_url(&self) -> Result<Option<String>, ConfigurationError> {
        self.endpoint_override().map(normalize_endpoint).transpose()
    }

    /// Add a custom attribute to every outgoing message.
    ///
    /// `Number` attributes take an integer and `String` attributes take
    /// text. Attributes keep insertion order and duplicate titles are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Marshal`] when the value does not match
    /// `data_type`; the attribute list is left unchanged.
    pub fn add_attribute(
        &mut self,
        data_type: DataType,
        title: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Result<(), AttributeError> {
        let attribute = CustomAttribute::new(data_type, title, value)?;
        self.attributes.push(attribute);
        Ok(())
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    pub fn with_retry_count(mut self, retry_count: i32) -> Self {
        self.retry_count = retry_count;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Non-empty endpoint override as configured, if any
    pub fn endpoint_override(&self) -> Option<&str> {
        self.hostname.as_deref().filter(|h| !h.is_empty())
    }

    /// Retry policy derived from `retry_count`
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_count)
    }

    /// Number of visibility timeout extensions to apply
    pub fn effective_extension_limit(&self) -> u32 {
        self.extension_limit.unwrap_or(DEFAULT_EXTENSION_LIMIT)
    }
}

fn normalize_endpoint(hostname: &str) -> Result<String, ConfigurationError> {
    let endpoint = if hostname.contains("://") {
        hostname.to_string()
    } else {
        format!("https://{}", hostname)
    };

    let invalid = |reason: String| ConfigurationError::Invalid {
        message: format!("hostname '{}' {}", hostname, reason),
    };

    let url =
        url::Url::parse(&endpoint).map_err(|e| invalid(format!("is not a valid URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!(
            "must use http or https, not '{}'",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("has no host".to_string()));
    }

    Ok(endpoint)
}
