//! Error types for configuration overlay and property loading.

use std::path::PathBuf;
use thiserror::Error;

/// A single override failed to parse or validate.
///
/// Every variant carries the property key and the raw text that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("The {field} '{value}' does not exist.")]
    InvalidDirectory { field: &'static str, value: String },

    #[error("The {field} value '{value}' is not a valid integer.")]
    InvalidInteger { field: &'static str, value: String },

    #[error("The {field} value '{value}' is not a valid TimeSpan.")]
    InvalidDuration { field: &'static str, value: String },

    #[error("The {field} value '{value}' is not a valid boolean.")]
    InvalidBoolean { field: &'static str, value: String },
}

impl ConfigError {
    /// Property key of the offending override.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::InvalidDirectory { field, .. }
            | ConfigError::InvalidInteger { field, .. }
            | ConfigError::InvalidDuration { field, .. }
            | ConfigError::InvalidBoolean { field, .. } => field,
        }
    }

    /// Raw override text that was rejected.
    pub fn value(&self) -> &str {
        match self {
            ConfigError::InvalidDirectory { value, .. }
            | ConfigError::InvalidInteger { value, .. }
            | ConfigError::InvalidDuration { value, .. }
            | ConfigError::InvalidBoolean { value, .. } => value,
        }
    }
}

/// Failure while reading property sources into a flat map.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read properties file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse properties from {origin}: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("properties in {origin} must be a flat mapping of names to values")]
    NotAMapping { origin: String },

    #[error("property '{key}' in {origin} must be a scalar value")]
    NonScalar { key: String, origin: String },

    #[error("invalid assignment '{0}', expected KEY=VALUE")]
    InvalidAssignment(String),
}

/// Result type for overlay operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let err = ConfigError::InvalidInteger {
            field: "BridgePort",
            value: "not-a-number".to_string(),
        };
        assert_eq!(err.field(), "BridgePort");
        assert_eq!(err.value(), "not-a-number");
    }

    #[test]
    fn test_messages_name_field_and_value() {
        let err = ConfigError::InvalidBoolean {
            field: "UseFiddlerUrl",
            value: "maybe".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The UseFiddlerUrl value 'maybe' is not a valid boolean."
        );

        let err = ConfigError::InvalidDirectory {
            field: "BridgeResourceFolder",
            value: "/nope".to_string(),
        };
        assert_eq!(err.to_string(), "The BridgeResourceFolder '/nope' does not exist.");
    }
}
