//! Error types for environment variable marshalling

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

use crate::duration::DurationError;

/// Boxed error returned by custom coders and per-field functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when marshalling between an [`EnvSet`](crate::EnvSet) and a struct.
///
/// The first six variants are raised by envset itself. The remaining ones carry
/// conversion failures from the value parsers (or from a custom coder) unchanged: their
/// `Display` and `source()` are those of the underlying error.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// The target record reference is `None`.
    #[error("value must be a non-null reference to a struct")]
    InvalidValue,

    /// The field type has no conversion rule.
    #[error("field of type {type_name} is an unsupported type")]
    UnsupportedType {
        /// Fully qualified name of the unsupported type
        type_name: &'static str,
    },

    /// A tagged field is not visible outside of its struct and cannot be set.
    ///
    /// Only fields declared `pub` (other than `pub(self)`) can be bound to environment
    /// variables.
    #[error("field '{field}' must be exported")]
    UnexportedField {
        /// Name of the offending field
        field: &'static str,
    },

    /// Required environment variable is not set and no default is given.
    #[error("Environment variable '{key}' is required but not set")]
    MissingRequiredValue {
        /// First candidate key of the offending field
        key: String,
    },

    /// A raw environment line does not follow the `KEY=VALUE` format.
    #[error("items in environ must have format key=value, got '{line}'")]
    InvalidFormat {
        /// The offending line
        line: String,
    },

    /// A tag option has a value that can never work.
    #[error("invalid env tag '{tag}': {reason}")]
    InvalidTag {
        /// The whole tag
        tag: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Integer parsing failed (non-numeric input or out of range).
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    /// Floating point parsing failed.
    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),

    /// Boolean parsing failed (only `true` and `false` are accepted).
    #[error(transparent)]
    ParseBool(#[from] ParseBoolError),

    /// Duration parsing failed.
    #[error(transparent)]
    Duration(#[from] DurationError),

    /// A custom coder or per-field function failed.
    #[error(transparent)]
    Custom(BoxError),
}

impl EnvError {
    /// Wrap an arbitrary error raised by a custom coder.
    pub fn custom(err: impl Into<BoxError>) -> Self {
        Self::Custom(err.into())
    }

    /// Create an unsupported type error for `T` (used by scalar impls)
    #[doc(hidden)]
    pub fn unsupported<T: ?Sized>() -> Self {
        Self::UnsupportedType {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a missing required value error (used by the converter)
    #[doc(hidden)]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingRequiredValue { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_errors_are_transparent() {
        let inner = "x".parse::<i32>().unwrap_err();
        let err = EnvError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_custom_keeps_source_message() {
        let err = EnvError::custom("broken payload");
        assert_eq!(err.to_string(), "broken payload");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_missing_names_key() {
        let err = EnvError::missing("REQUIRED_VAL");
        assert_eq!(
            err.to_string(),
            "Environment variable 'REQUIRED_VAL' is required but not set"
        );
    }

    #[test]
    fn test_unsupported_names_type() {
        match EnvError::unsupported::<std::time::SystemTime>() {
            EnvError::UnsupportedType { type_name } => assert!(type_name.contains("SystemTime")),
            other => panic!("Expected UnsupportedType, got {other:?}"),
        }
    }
}
