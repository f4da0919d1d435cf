//! Parsing of `env` tag strings.
//!
//! A tag is a comma separated list of candidate keys followed (in any order) by
//! `key=value` options:
//!
//! ```text
//! KEY1[,KEY2,...][,default=<literal>][,required=true|false][,separator=<text>]
//! ```

use crate::error::EnvError;

/// Separator used to split and join list values when the tag does not set one.
pub const DEFAULT_SEPARATOR: &str = "|";

/// Parsed form of a field's `env` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Candidate keys in declared order; the first one present wins.
    pub keys: Vec<String>,

    /// Literal used when none of the keys is present.
    pub default: Option<String>,

    /// Fail when none of the keys is present and there is no default.
    pub required: bool,

    /// Delimiter for list values.
    pub separator: String,
}

impl Binding {
    /// Parse a tag string.
    ///
    /// Unknown `key=value` options are ignored. Fails on a `required=` option whose
    /// value is neither `true` nor `false`, and on an empty `separator=`.
    pub fn parse(tag: &str) -> Result<Self, EnvError> {
        let mut binding = Self {
            keys: Vec::new(),
            default: None,
            required: false,
            separator: DEFAULT_SEPARATOR.to_string(),
        };

        for segment in tag.split(',') {
            match segment.split_once('=') {
                Some(("default", value)) => binding.default = Some(value.to_string()),
                Some(("required", value)) => binding.required = value.parse()?,
                Some(("separator", "")) => {
                    return Err(EnvError::InvalidTag {
                        tag: tag.to_string(),
                        reason: "separator must not be empty",
                    });
                }
                Some(("separator", value)) => binding.separator = value.to_string(),
                Some(_) => {}
                None if segment.is_empty() => {}
                None => binding.keys.push(segment.to_string()),
            }
        }

        Ok(binding)
    }

    /// Key written by `marshal`, `None` if the tag names no key.
    pub fn output_key(&self) -> Option<&str> {
        self.keys.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_key() {
        let binding = Binding::parse("HOME").unwrap();
        assert_eq!(binding.keys, vec!["HOME"]);
        assert_eq!(binding.default, None);
        assert!(!binding.required);
        assert_eq!(binding.separator, "|");
    }

    #[test]
    fn test_parse_aliases_keep_order() {
        let binding = Binding::parse("npm_config_cache,NPM_CONFIG_CACHE").unwrap();
        assert_eq!(binding.keys, vec!["npm_config_cache", "NPM_CONFIG_CACHE"]);
        assert_eq!(binding.output_key(), Some("npm_config_cache"));
    }

    #[test]
    fn test_parse_default_keeps_equals() {
        let binding = Binding::parse("MISSING_KVSTRING,default=key=value").unwrap();
        assert_eq!(binding.keys, vec!["MISSING_KVSTRING"]);
        assert_eq!(binding.default.as_deref(), Some("key=value"));
    }

    #[test]
    fn test_parse_options_in_any_order() {
        let binding =
            Binding::parse("A,separator=&,required=true,B,default=x&y").unwrap();
        assert_eq!(binding.keys, vec!["A", "B"]);
        assert_eq!(binding.separator, "&");
        assert!(binding.required);
        assert_eq!(binding.default.as_deref(), Some("x&y"));
    }

    #[test]
    fn test_parse_ignores_unknown_options() {
        let binding = Binding::parse("INVALID,invalid=invalid").unwrap();
        assert_eq!(binding.keys, vec!["INVALID"]);
    }

    #[test]
    fn test_parse_without_keys() {
        let binding = Binding::parse("default=7").unwrap();
        assert!(binding.keys.is_empty());
        assert_eq!(binding.output_key(), None);
    }

    #[test]
    fn test_parse_invalid_required() {
        let result = Binding::parse("A,required=maybe");
        assert!(matches!(result, Err(EnvError::ParseBool(_))));
    }

    #[test]
    fn test_parse_empty_separator() {
        match Binding::parse("LIST,separator=") {
            Err(EnvError::InvalidTag { tag, reason }) => {
                assert_eq!(tag, "LIST,separator=");
                assert_eq!(reason, "separator must not be empty");
            }
            other => panic!("Expected InvalidTag, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_default() {
        let binding = Binding::parse("A,default=").unwrap();
        assert_eq!(binding.default.as_deref(), Some(""));
    }
}
