//! Process environment lookup and deployment tier classification.
//!
//! Environment reads go through [`EnvironmentSource`] so that tier and
//! credential resolution can be exercised without mutating the real
//! process environment.

use std::collections::HashMap;
use std::fmt;

/// Variable naming the deployment tier
pub const TIER_VARIABLE: &str = "ENV";

/// Tier assumed when [`TIER_VARIABLE`] is unset
pub const DEFAULT_TIER: &str = "dev";

/// Read access to environment variables
pub trait EnvironmentSource: Send + Sync {
    /// Look up a variable, returning `None` when it is unset
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory set of variables
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, replacing any previous value
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvironmentSource for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Deployment tier the process runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `production` or `staging`; credentials come from the hosting environment
    NonLocal,
    /// Anything else, including an unset tier variable
    Local,
}

impl Tier {
    /// Classify a raw tier name
    pub fn from_name(name: &str) -> Self {
        match name {
            "production" | "staging" => Self::NonLocal,
            _ => Self::Local,
        }
    }

    /// Read the tier variable and classify it.
    ///
    /// An unset variable is treated as [`DEFAULT_TIER`], which is local.
    pub fn detect(env: &dyn EnvironmentSource) -> Self {
        let name = env
            .var(TIER_VARIABLE)
            .unwrap_or_else(|| DEFAULT_TIER.to_string());
        Self::from_name(&name)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonLocal => write!(f, "non-local"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Check whether the process runs outside production and staging
pub fn is_local(env: &dyn EnvironmentSource) -> bool {
    Tier::detect(env).is_local()
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
