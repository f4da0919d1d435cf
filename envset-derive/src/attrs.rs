//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates the binding of a struct field during macro
//! expansion. The tag string itself is parsed again at runtime by `envset::tag`;
//! here it is only checked for mistakes that can be reported at compile time.

use syn::parse::ParseStream;
use syn::{Field, Ident, LitStr, Path, Token};

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// The `env` tag, e.g. `"HOME,default=/root"`.
    ///
    /// If `None`, the field is not bound to any variable.
    pub tag: Option<LitStr>,

    /// The field is a struct implementing `Env` and is recursed into.
    pub nested: bool,

    /// Custom decode function (e.g., `"serde_json::from_str"`).
    pub deserializer: Option<Path>,

    /// Custom encode function (e.g., `"serde_json::to_string"`).
    pub serializer: Option<Path>,
}

impl FieldAttrs {
    /// Extract and validate `#[env(...)]` attributes from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_args_with(|input: ParseStream| {
                while !input.is_empty() {
                    if input.peek(LitStr) {
                        // "TAG"
                        attrs.set_tag(input.parse()?)?;
                    } else {
                        let ident: Ident = input.parse()?;
                        match ident.to_string().as_str() {
                            // nested
                            "nested" => attrs.nested = true,
                            // tag = "TAG"
                            "tag" => {
                                input.parse::<Token![=]>()?;
                                attrs.set_tag(input.parse()?)?;
                            }
                            // deserializer = "function::path"
                            "deserializer" => {
                                input.parse::<Token![=]>()?;
                                let lit: LitStr = input.parse()?;
                                attrs.deserializer = Some(lit.parse()?);
                            }
                            // serializer = "function::path"
                            "serializer" => {
                                input.parse::<Token![=]>()?;
                                let lit: LitStr = input.parse()?;
                                attrs.serializer = Some(lit.parse()?);
                            }
                            other => {
                                return Err(syn::Error::new(
                                    ident.span(),
                                    format!("unsupported env attribute `{other}`"),
                                ));
                            }
                        }
                    }

                    if input.is_empty() {
                        break;
                    }
                    input.parse::<Token![,]>()?;
                }
                Ok(())
            })?;
        }

        if attrs.tag.is_none() {
            if let Some(path) = attrs.deserializer.as_ref().or(attrs.serializer.as_ref()) {
                return Err(syn::Error::new_spanned(
                    path,
                    "deserializer and serializer require an env tag",
                ));
            }
        }

        Ok(attrs)
    }

    fn set_tag(&mut self, lit: LitStr) -> syn::Result<()> {
        if self.tag.is_some() {
            return Err(syn::Error::new(lit.span(), "duplicate env tag"));
        }
        validate_tag(&lit)?;
        self.tag = Some(lit);
        Ok(())
    }
}

/// Reject tags that can never bind or that would fail on every call.
fn validate_tag(lit: &LitStr) -> syn::Result<()> {
    let tag = lit.value();
    let mut has_key = false;

    for segment in tag.split(',') {
        match segment.split_once('=') {
            Some(("required", value)) if value != "true" && value != "false" => {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("required must be `true` or `false`, got `{value}`"),
                ));
            }
            Some(("separator", "")) => {
                return Err(syn::Error::new(lit.span(), "separator must not be empty"));
            }
            Some(_) => {}
            None => has_key |= !segment.is_empty(),
        }
    }

    if !has_key {
        return Err(syn::Error::new(
            lit.span(),
            "env tag must name at least one key",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_tag_shorthand() {
        let field: Field = parse_quote! {
            #[env("HOME")]
            pub home: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag.map(|t| t.value()), Some("HOME".to_string()));
        assert!(!attrs.nested);
    }

    #[test]
    fn test_parse_tag_key_value() {
        let field: Field = parse_quote! {
            #[env(tag = "MISSING_INT,default=7")]
            pub default_int: i32
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(
            attrs.tag.map(|t| t.value()),
            Some("MISSING_INT,default=7".to_string())
        );
    }

    #[test]
    fn test_parse_nested() {
        let field: Field = parse_quote! {
            #[env(nested)]
            pub jenkins: Jenkins
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.nested);
        assert!(attrs.tag.is_none());
    }

    #[test]
    fn test_parse_multiple_attributes() {
        let field: Field = parse_quote! {
            #[env("JSON_DATA", deserializer = "serde_json::from_str", serializer = "serde_json::to_string")]
            pub json_data: JsonData
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.tag.is_some());
        let deserializer = attrs.deserializer.unwrap();
        let segments: Vec<String> = deserializer
            .segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect();
        assert_eq!(segments, vec!["serde_json", "from_str"]);
        assert!(attrs.serializer.is_some());
    }

    #[test]
    fn test_no_env_attribute() {
        let field: Field = parse_quote! {
            #[serde(rename = "x")]
            pub extra: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.tag.is_none());
        assert!(!attrs.nested);
    }

    #[test]
    fn test_reject_tag_without_key() {
        let field: Field = parse_quote! {
            #[env("default=1")]
            pub port: u16
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert_eq!(err.to_string(), "env tag must name at least one key");
    }

    #[test]
    fn test_reject_invalid_required() {
        let field: Field = parse_quote! {
            #[env("PORT,required=yes")]
            pub port: u16
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_reject_empty_separator() {
        let field: Field = parse_quote! {
            #[env("LIST,separator=")]
            pub list: Vec<String>
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert_eq!(err.to_string(), "separator must not be empty");
    }

    #[test]
    fn test_reject_duplicate_tag() {
        let field: Field = parse_quote! {
            #[env("A", tag = "B")]
            pub value: String
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert_eq!(err.to_string(), "duplicate env tag");
    }

    #[test]
    fn test_reject_unknown_attribute() {
        let field: Field = parse_quote! {
            #[env("A", flatten)]
            pub value: String
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert_eq!(err.to_string(), "unsupported env attribute `flatten`");
    }

    #[test]
    fn test_reject_deserializer_without_tag() {
        let field: Field = parse_quote! {
            #[env(deserializer = "serde_json::from_str")]
            pub value: Vec<String>
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }
}
