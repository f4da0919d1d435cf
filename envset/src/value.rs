//! Conversion of single values to and from their environment representation

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use crate::duration;
use crate::error::EnvError;

/// A type that can be read from and written to a single environment value.
///
/// All supported scalars implement this trait. Implement it for your own types to
/// control how they are decoded and encoded; a custom implementation is used as is,
/// inside `Option<T>` and as the element type of `Vec<T>` as well.
///
/// # Example
///
/// ```rust
/// use envset::{EnvError, EnvValue};
///
/// #[derive(Debug, PartialEq)]
/// struct Upper(String);
///
/// impl EnvValue for Upper {
///     fn decode_env(value: &str) -> Result<Self, EnvError> {
///         Ok(Upper(value.to_uppercase()))
///     }
///
///     fn encode_env(&self) -> Result<String, EnvError> {
///         Ok(self.0.to_lowercase())
///     }
/// }
///
/// assert_eq!(Upper::decode_env("abc").unwrap(), Upper("ABC".to_string()));
/// ```
pub trait EnvValue: Sized {
    /// Decode a raw environment value.
    fn decode_env(value: &str) -> Result<Self, EnvError>;

    /// Encode into a raw environment value.
    fn encode_env(&self) -> Result<String, EnvError>;
}

impl EnvValue for String {
    fn decode_env(value: &str) -> Result<Self, EnvError> {
        Ok(value.to_string())
    }

    fn encode_env(&self) -> Result<String, EnvError> {
        Ok(self.clone())
    }
}

impl EnvValue for PathBuf {
    fn decode_env(value: &str) -> Result<Self, EnvError> {
        Ok(PathBuf::from(value))
    }

    fn encode_env(&self) -> Result<String, EnvError> {
        Ok(self.to_string_lossy().into_owned())
    }
}

/// Scalars whose `FromStr` and `Display` already match the environment format.
macro_rules! impl_env_value_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                fn decode_env(value: &str) -> Result<Self, EnvError> {
                    Ok(value.parse::<$ty>()?)
                }

                fn encode_env(&self) -> Result<String, EnvError> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

impl_env_value_from_str!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl EnvValue for Duration {
    fn decode_env(value: &str) -> Result<Self, EnvError> {
        Ok(duration::parse(value)?)
    }

    fn encode_env(&self) -> Result<String, EnvError> {
        Ok(duration::format(self))
    }
}

/// Points in time have no environment format; decoding always fails.
impl EnvValue for SystemTime {
    fn decode_env(_value: &str) -> Result<Self, EnvError> {
        Err(EnvError::unsupported::<Self>())
    }

    fn encode_env(&self) -> Result<String, EnvError> {
        Ok(format!("{self:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::IntErrorKind;

    #[test]
    fn test_string_verbatim() {
        assert_eq!(String::decode_env(" a=b ").unwrap(), " a=b ");
        assert_eq!("".to_string().encode_env().unwrap(), "");
    }

    #[test]
    fn test_bool_strict() {
        assert!(bool::decode_env("true").unwrap());
        assert!(!bool::decode_env("false").unwrap());
        assert!(matches!(bool::decode_env("1"), Err(EnvError::ParseBool(_))));
        assert!(matches!(bool::decode_env("TRUE"), Err(EnvError::ParseBool(_))));
        assert_eq!(true.encode_env().unwrap(), "true");
    }

    #[test]
    fn test_integers() {
        assert_eq!(i64::decode_env("-42").unwrap(), -42);
        assert_eq!(u32::decode_env("4294967295").unwrap(), u32::MAX);
        assert_eq!(u32::MAX.encode_env().unwrap(), "4294967295");
    }

    #[test]
    fn test_integer_overflow_is_distinguished() {
        match u32::decode_env("4294967296") {
            Err(EnvError::ParseInt(e)) => assert_eq!(e.kind(), &IntErrorKind::PosOverflow),
            other => panic!("Expected ParseInt error, got {other:?}"),
        }
        match i32::decode_env("abc") {
            Err(EnvError::ParseInt(e)) => assert_eq!(e.kind(), &IntErrorKind::InvalidDigit),
            other => panic!("Expected ParseInt error, got {other:?}"),
        }
    }

    #[test]
    fn test_floats() {
        assert_eq!(f32::decode_env("2.3").unwrap(), 2.3);
        assert_eq!(f64::decode_env("4.5").unwrap(), 4.5);
        assert_eq!(2.3f32.encode_env().unwrap(), "2.3");
        assert_eq!(10.11f64.encode_env().unwrap(), "10.11");
        assert!(matches!(f64::decode_env("x"), Err(EnvError::ParseFloat(_))));
    }

    #[test]
    fn test_duration() {
        assert_eq!(Duration::decode_env("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(Duration::from_secs(180).encode_env().unwrap(), "3m0s");
        assert!(matches!(Duration::decode_env("5"), Err(EnvError::Duration(_))));
    }

    #[test]
    fn test_path() {
        assert_eq!(
            PathBuf::decode_env("/mnt/builds").unwrap(),
            PathBuf::from("/mnt/builds")
        );
    }

    #[test]
    fn test_system_time_is_unsupported() {
        let result = SystemTime::decode_env("2016-07-15T12:00:00.000Z");
        assert!(matches!(result, Err(EnvError::UnsupportedType { .. })));
        assert!(SystemTime::UNIX_EPOCH.encode_env().is_ok());
    }
}
