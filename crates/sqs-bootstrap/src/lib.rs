//! # SQS Bootstrap
//!
//! Turns a small declarative [`Config`] into a ready-to-use messaging
//! client [`Session`] for SQS and SNS.
//!
//! This library provides:
//! - Deployment tier detection (production/staging vs. local)
//! - Credential resolution per tier, including a local emulator endpoint
//! - A bounded retry policy for the SDK request layer
//! - Typed custom attributes attached to outgoing messages
//!
//! ## Module Organization
//!
//! - [`error`] - Error types for session and attribute construction
//! - [`environment`] - Environment lookup and tier classification
//! - [`attributes`] - Custom message attributes
//! - [`retry`] - Retry policy
//! - [`logging`] - Logger capability carried by the configuration
//! - [`config`] - Client configuration and loading
//! - [`credentials`] - Environment credentials and validation
//! - [`session`] - Session construction

pub mod attributes;
pub mod config;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod logging;
pub mod retry;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use attributes::{AttributeValue, CustomAttribute, DataType};
pub use config::Config;
pub use credentials::{CredentialValidator, ProviderCredentialValidator};
pub use environment::{is_local, EnvironmentSource, ProcessEnvironment, StaticEnvironment, Tier};
pub use error::{AttributeError, BootstrapError, ConfigurationError, SessionError};
pub use logging::{Logger, TracingLogger};
pub use retry::RetryPolicy;
pub use session::{Session, SessionFactory, SessionMode, LOCAL_EMULATOR_ENDPOINT};
