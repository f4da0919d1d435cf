//! Derive macro implementation for envset

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Path, Type, Visibility};

mod attrs;

use attrs::FieldAttrs;

/// How a field type is converted, from the outside in.
enum Shape<'a> {
    /// `Option<T>`: set on presence, omitted on encode when `None`
    Option(Box<Shape<'a>>),
    /// `Vec<T>`: split on the separator
    List(&'a Type),
    /// Anything else, converted through `EnvValue`
    Value(&'a Type),
}

/// Extract the type argument of `Wrapper<T>` if `ty` is `Wrapper<T>`
fn generic_argument<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let seg = type_path.path.segments.last()?;
    if seg.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// Classify `ty`. With a custom function, only `Option` layers are unwrapped and the
/// function handles whatever is inside.
fn shape(ty: &Type, custom: bool) -> Shape<'_> {
    if let Some(inner) = generic_argument(ty, "Option") {
        return Shape::Option(Box::new(shape(inner, custom)));
    }
    if !custom {
        if let Some(elem) = generic_argument(ty, "Vec") {
            return Shape::List(elem);
        }
    }
    Shape::Value(ty)
}

/// Expression producing the decoded field value from `__found`
fn decode_expr(shape: &Shape, deserializer: Option<&Path>) -> TokenStream2 {
    match (shape, deserializer) {
        (Shape::Option(inner), _) => {
            let inner = decode_expr(inner, deserializer);
            quote! { ::core::option::Option::Some(#inner) }
        }
        (_, Some(func)) => quote! {
            ::envset::de::custom(#func(__found.value()))?
        },
        (Shape::List(elem), None) => quote! {
            ::envset::de::decode_list::<#elem>(&__found)?
        },
        (Shape::Value(ty), None) => quote! {
            ::envset::de::decode_value::<#ty>(&__found)?
        },
    }
}

/// Expression producing `Option<String>` from `value`, a reference to the field value
fn encode_expr(
    shape: &Shape,
    value: TokenStream2,
    serializer: Option<&Path>,
    depth: usize,
) -> TokenStream2 {
    match (shape, serializer) {
        (Shape::Option(inner), _) => {
            let binding = format_ident!("__value{}", depth);
            let inner = encode_expr(inner, quote! { #binding }, serializer, depth + 1);
            quote! {
                match #value {
                    ::core::option::Option::Some(#binding) => #inner,
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }
        }
        (_, Some(func)) => quote! {
            ::core::option::Option::Some(::envset::ser::custom(#func(#value))?)
        },
        (Shape::List(_), None) => quote! {
            ::core::option::Option::Some(
                ::envset::ser::encode_list(#value, __binding.separator.as_str())?
            )
        },
        (Shape::Value(_), None) => quote! {
            ::core::option::Option::Some(::envset::ser::encode_value(#value)?)
        },
    }
}

/// Whether the field is visible outside of its struct's module.
///
/// `pub(self)` and `pub(in self)` are the same as no visibility at all.
fn is_exported(vis: &Visibility) -> bool {
    match vis {
        Visibility::Inherited => false,
        Visibility::Restricted(restricted) => !restricted.path.is_ident("self"),
        Visibility::Public(_) => true,
    }
}

/// Generate the decode and encode statements for one field
fn field_statements(field: &Field) -> syn::Result<(TokenStream2, TokenStream2)> {
    let attrs = FieldAttrs::from_field(field)?;
    let Some(field_name) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "Env fields must be named"));
    };
    let field_str = field_name.to_string().trim_start_matches("r#").to_string();

    let mut decode = TokenStream2::new();
    let mut encode = TokenStream2::new();

    if attrs.nested {
        decode.extend(quote! {
            ::envset::Env::unmarshal_env(&mut self.#field_name, __es)?;
        });
        encode.extend(quote! {
            ::envset::Env::marshal_env(&self.#field_name, __es)?;
        });
    }

    if let Some(tag) = &attrs.tag {
        let exported = is_exported(&field.vis);

        let decode_shape = shape(&field.ty, attrs.deserializer.is_some());
        let decode_value = decode_expr(&decode_shape, attrs.deserializer.as_ref());
        decode.extend(quote! {
            if let ::core::option::Option::Some(__found) =
                ::envset::de::lookup(__es, #field_str, #tag, #exported)?
            {
                self.#field_name = #decode_value;
                __found.consume(__es);
            }
        });

        let encode_shape = shape(&field.ty, attrs.serializer.is_some());
        let encode_value = encode_expr(
            &encode_shape,
            quote! { &self.#field_name },
            attrs.serializer.as_ref(),
            0,
        );
        encode.extend(quote! {
            if let ::core::option::Option::Some(__binding) = ::envset::ser::binding(#tag)? {
                let __encoded: ::core::option::Option<::std::string::String> = #encode_value;
                ::envset::ser::insert(__es, &__binding, __encoded);
            }
        });
    }

    Ok((decode, encode))
}

/// `Env` derive macro
///
/// Implements `envset::Env` for a struct with named fields.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env("KEY1,KEY2,default=value,required=true,separator=&")]`: bind the field
/// - `#[env(tag = "...")]`: same as above
/// - `#[env(nested)]`: recurse into a field whose type implements `Env`
/// - `#[env("...", deserializer = "func")]`: decode with `func(&str) -> Result<T, E>`
/// - `#[env("...", serializer = "func")]`: encode with `func(&T) -> Result<String, E>`
///
/// Fields without an `env` attribute are ignored. Tagged fields declared without
/// `pub` fail to decode with `EnvError::UnexportedField`.
///
/// # Example
///
/// See the `envset` crate documentation for usage examples.
#[proc_macro_derive(Env, attributes(env))]
pub fn derive_env(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Struct name
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    struct_name,
                    "Env can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(struct_name, "Env can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    let mut decoders = Vec::with_capacity(fields.len());
    let mut encoders = Vec::with_capacity(fields.len());
    let mut errors: Option<syn::Error> = None;

    for field in fields {
        match field_statements(field) {
            Ok((decode, encode)) => {
                decoders.push(decode);
                encoders.push(encode);
            }
            Err(err) => match errors.as_mut() {
                Some(errors) => errors.combine(err),
                None => errors = Some(err),
            },
        }
    }

    if let Some(errors) = errors {
        return errors.to_compile_error().into();
    }

    let expanded = quote! {
        impl #impl_generics ::envset::Env for #struct_name #ty_generics #where_clause {
            fn unmarshal_env(
                &mut self,
                __es: &mut ::envset::EnvSet,
            ) -> ::core::result::Result<(), ::envset::EnvError> {
                #(#decoders)*
                ::core::result::Result::Ok(())
            }

            fn marshal_env(
                &self,
                __es: &mut ::envset::EnvSet,
            ) -> ::core::result::Result<(), ::envset::EnvError> {
                #(#encoders)*
                ::core::result::Result::Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_is_exported() {
        let exported: Vec<Visibility> = vec![
            parse_quote!(pub),
            parse_quote!(pub(crate)),
            parse_quote!(pub(super)),
            parse_quote!(pub(in crate::config)),
        ];
        for vis in &exported {
            assert!(is_exported(vis));
        }

        let private: Vec<Visibility> = vec![
            Visibility::Inherited,
            parse_quote!(pub(self)),
            parse_quote!(pub(in self)),
        ];
        for vis in &private {
            assert!(!is_exported(vis));
        }
    }

    #[test]
    fn test_shape_unwraps_option_around_custom() {
        let ty: Type = parse_quote!(Option<Vec<String>>);
        match shape(&ty, true) {
            Shape::Option(inner) => assert!(matches!(*inner, Shape::Value(_))),
            _ => panic!("Expected Option shape"),
        }
        match shape(&ty, false) {
            Shape::Option(inner) => assert!(matches!(*inner, Shape::List(_))),
            _ => panic!("Expected Option shape"),
        }
    }
}
