//! Pluggable logger carried by [`Config`](crate::Config).
//!
//! Publish and consume loops report through this capability so embedding
//! applications can route their output. The default forwards to `tracing`.

use std::fmt;

/// Logging capability shared with message processing components
pub trait Logger: Send + Sync {
    fn println(&self, message: &str);
}

/// Forwards messages to `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn println(&self, message: &str) {
        tracing::info!(target: "sqs_bootstrap", "{}", message);
    }
}

impl fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Logger")
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
