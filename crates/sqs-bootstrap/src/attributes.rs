//! Custom message attributes.
//!
//! Attributes are metadata sent alongside a message body, such as a
//! correlation id. They show up on the queue service's console using the
//! data type tags `Number` and `String`, so those exact strings are kept
//! for interoperability.

use crate::error::AttributeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data type tag of a custom attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Number,
    String,
}

impl DataType {
    /// Tag as transmitted to the queue service
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::String => "String",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed value supplied for an attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Integer(i64),
    Text(String),
}

impl AttributeValue {
    /// Data type this value naturally encodes as
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Integer(_) => DataType::Number,
            Self::Text(_) => DataType::String,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Immutable attribute attached to outgoing messages.
///
/// The value is always held in its string form; construction guarantees it
/// came from a value matching `data_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomAttribute {
    title: String,
    data_type: DataType,
    value: String,
}

impl CustomAttribute {
    /// Create an attribute, checking the value against the declared type
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Marshal`] when `value` is an integer for a
    /// `String` attribute or text for a `Number` attribute.
    pub fn new(
        data_type: DataType,
        title: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Result<Self, AttributeError> {
        let title = title.into();
        let value = value.into();

        let encoded = match (data_type, value) {
            (DataType::Number, AttributeValue::Integer(n)) => n.to_string(),
            (DataType::String, AttributeValue::Text(s)) => s,
            (expected, other) => {
                return Err(AttributeError::Marshal {
                    title,
                    expected: expected.to_string(),
                    actual: other.data_type().to_string(),
                })
            }
        };

        Ok(Self {
            title,
            data_type,
            value: encoded,
        })
    }

    /// Create a `Number` attribute
    pub fn number(title: impl Into<String>, value: i64) -> Self {
        Self {
            title: title.into(),
            data_type: DataType::Number,
            value: value.to_string(),
        }
    }

    /// Create a `String` attribute
    pub fn string(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            data_type: DataType::String,
            value: value.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
#[path = "attributes_tests.rs"]
mod tests;
