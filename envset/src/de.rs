//! Decoding of struct fields from an [`EnvSet`]
//!
//! These functions are called by code generated with `#[derive(Env)]`, and can be
//! used to implement [`Env`](crate::Env) by hand:
//!
//! ```rust
//! use envset::{de, Env, EnvError, EnvSet};
//!
//! struct Config {
//!     port: u16,
//! }
//!
//! impl Env for Config {
//!     fn unmarshal_env(&mut self, es: &mut EnvSet) -> Result<(), EnvError> {
//!         if let Some(found) = de::lookup(es, "port", "PORT,default=8080", true)? {
//!             self.port = de::decode_value(&found)?;
//!             found.consume(es);
//!         }
//!         Ok(())
//!     }
//!
//!     fn marshal_env(&self, es: &mut EnvSet) -> Result<(), EnvError> {
//!         es.insert("PORT".to_string(), envset::ser::encode_value(&self.port)?);
//!         Ok(())
//!     }
//! }
//! ```

use crate::error::{BoxError, EnvError};
use crate::tag::Binding;
use crate::transform::EnvSet;
use crate::value::EnvValue;

/// Value selected for a field by [`lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    key: Option<String>,
    value: String,
    separator: String,
}

impl Found {
    /// Key the value was read from, `None` when the default was used.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Raw value to decode.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Delimiter for list values.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Remove the matched entry from `es`.
    ///
    /// Call this once the value has been decoded successfully. Defaults do not
    /// come from `es` and leave it untouched.
    pub fn consume(self, es: &mut EnvSet) {
        if let Some(key) = self.key {
            es.remove(&key);
        }
    }
}

/// Select the value for a tagged field.
///
/// Returns `Ok(None)` when the field should be left untouched: the tag names no key,
/// or none of the keys is present and the field is neither defaulted nor required.
///
/// # Errors
///
/// - [`EnvError::UnexportedField`] if `exported` is false
/// - [`EnvError::MissingRequiredValue`] naming the first key of a required field
/// - [`EnvError::ParseBool`] for a malformed `required=` option
/// - [`EnvError::InvalidTag`] for an empty `separator=` option
pub fn lookup(
    es: &EnvSet,
    field: &'static str,
    tag: &str,
    exported: bool,
) -> Result<Option<Found>, EnvError> {
    let Binding {
        keys,
        default,
        required,
        separator,
    } = Binding::parse(tag)?;

    let Some(first) = keys.first() else {
        return Ok(None);
    };

    if !exported {
        return Err(EnvError::UnexportedField { field });
    }

    if let Some((key, value)) = keys
        .iter()
        .find_map(|key| es.get(key).map(|value| (key, value)))
    {
        tracing::trace!(key = %key, field, "bound environment variable");
        return Ok(Some(Found {
            key: Some(key.clone()),
            value: value.clone(),
            separator,
        }));
    }

    if let Some(value) = default {
        tracing::debug!(key = %first, field, "using default value");
        return Ok(Some(Found {
            key: None,
            value,
            separator,
        }));
    }

    if required {
        tracing::debug!(key = %first, field, "required environment variable is not set");
        return Err(EnvError::missing(first.as_str()));
    }

    tracing::debug!(key = %first, field, "environment variable not set, field left untouched");
    Ok(None)
}

/// Decode a scalar or custom coder value.
pub fn decode_value<T: EnvValue>(found: &Found) -> Result<T, EnvError> {
    T::decode_env(found.value())
}

/// Decode a list by splitting on the field separator.
///
/// An empty value decodes to a single element made from the empty string.
pub fn decode_list<T: EnvValue>(found: &Found) -> Result<Vec<T>, EnvError> {
    found
        .value()
        .split(found.separator())
        .map(T::decode_env)
        .collect()
}

/// Convert the result of a `deserializer = "..."` function.
pub fn custom<T, E>(result: Result<T, E>) -> Result<T, EnvError>
where
    E: Into<BoxError>,
{
    result.map_err(EnvError::custom)
}
