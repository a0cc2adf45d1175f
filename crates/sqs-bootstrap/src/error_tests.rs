//! Tests for error types.

use super::*;

#[test]
fn test_missing_credential_variable_is_fatal() {
    let error = SessionError::MissingCredentialVariable {
        variable: "AWS_ACCESS_KEY_ID".to_string(),
    };

    assert!(error.is_fatal());
    assert_eq!(error.to_string(), "AWS_ACCESS_KEY_ID is not set");
}

#[test]
fn test_invalid_credentials_is_not_fatal() {
    let error = SessionError::InvalidCredentials {
        source: CredentialsError::not_loaded("no credentials"),
    };

    assert!(!error.is_fatal());
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_configuration_error_propagates_message_unchanged() {
    let inner = ConfigurationError::Missing {
        key: "region".to_string(),
    };
    let error = SessionError::from(inner);

    assert!(!error.is_fatal());
    assert_eq!(error.to_string(), "Missing required configuration: region");
}

#[test]
fn test_bootstrap_error_wraps_attribute_error() {
    let error: BootstrapError = AttributeError::Marshal {
        title: "correlationId".to_string(),
        expected: "Number".to_string(),
        actual: "String".to_string(),
    }
    .into();

    assert!(matches!(error, BootstrapError::Attribute(_)));
    assert!(error.to_string().contains("correlationId"));
}
