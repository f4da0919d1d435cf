//! Encoding of struct fields into an [`EnvSet`]
//!
//! Used by code generated with `#[derive(Env)]`.

use crate::error::{BoxError, EnvError};
use crate::tag::Binding;
use crate::transform::EnvSet;
use crate::value::EnvValue;

/// Parse the tag of a field for encoding.
///
/// Returns `Ok(None)` when the tag names no key and the field is not written.
pub fn binding(tag: &str) -> Result<Option<Binding>, EnvError> {
    let binding = Binding::parse(tag)?;
    Ok(binding.output_key().is_some().then_some(binding))
}

/// Write an encoded field under its output key.
///
/// `None` (an unset `Option` field) writes nothing.
pub fn insert(es: &mut EnvSet, binding: &Binding, value: Option<String>) {
    let Some(key) = binding.output_key() else {
        return;
    };
    match value {
        Some(value) => {
            es.insert(key.to_string(), value);
        }
        None => {
            tracing::debug!(key, "field not set, key omitted");
        }
    }
}

/// Encode a scalar or custom coder value.
pub fn encode_value<T: EnvValue>(value: &T) -> Result<String, EnvError> {
    value.encode_env()
}

/// Encode a list, joining the elements with `separator`.
pub fn encode_list<T: EnvValue>(values: &[T], separator: &str) -> Result<String, EnvError> {
    let encoded = values
        .iter()
        .map(EnvValue::encode_env)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(encoded.join(separator))
}

/// Convert the result of a `serializer = "..."` function.
pub fn custom<E>(result: Result<String, E>) -> Result<String, EnvError>
where
    E: Into<BoxError>,
{
    result.map_err(EnvError::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_binding_uses_first_key() {
        let binding = binding("npm_config_cache,NPM_CONFIG_CACHE,default=x")
            .unwrap()
            .unwrap();
        assert_eq!(binding.output_key(), Some("npm_config_cache"));
    }

    #[test]
    fn test_binding_without_keys() {
        assert_eq!(binding("default=x,required=false").unwrap(), None);
    }

    #[test]
    fn test_insert_omits_none() {
        let binding = Binding::parse("POINTER_MISSING").unwrap();
        let mut es = EnvSet::new();
        insert(&mut es, &binding, None);
        assert!(es.is_empty());

        insert(&mut es, &binding, Some(String::new()));
        assert_eq!(es["POINTER_MISSING"], "");
    }

    #[test]
    fn test_encode_list() {
        assert_eq!(encode_list(&[1, 2], "|").unwrap(), "1|2");
        assert_eq!(
            encode_list(&[Duration::from_secs(60), Duration::from_secs(70 * 3600)], "&").unwrap(),
            "1m0s&70h0m0s"
        );
        assert_eq!(encode_list::<String>(&[], "|").unwrap(), "");
    }

    #[test]
    fn test_custom_wraps_error() {
        let result = custom(Err::<String, _>("cannot encode"));
        assert_eq!(result.unwrap_err().to_string(), "cannot encode");
    }
}
