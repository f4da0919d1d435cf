//! Marshal environment variables to and from typed structs
//!
//! `envset` binds struct fields to environment variables with a declarative `env` tag.
//! Variables are handled as an [`EnvSet`] (a flat `String` to `String` map), which makes
//! the conversion independent from the process environment: decode the real
//! environment at startup, or any map in tests.
//!
//! # Features
//!
//! - **Declarative**: Automatic implementation with `#[derive(Env)]`
//! - **Aliases**: Several candidate keys per field, the first one present wins
//! - **Leftovers**: Bound variables are removed from the [`EnvSet`], the rest is yours
//! - **Both directions**: [`unmarshal`] into a struct, [`marshal`] back into an [`EnvSet`]
//! - **Custom coders**: Implement [`EnvValue`] for your own types
//!
//! # Value Parsing
//!
//! - Strings and paths: verbatim
//! - Booleans: `true` or `false`
//! - Integers and floats: base 10, out of range values are rejected
//! - Durations: `5s`, `1h30m`, `300ms` (encoded as `3m0s`, `1h0m0s`, ...)
//! - `Option<T>`: `None` when no key is set, `Some` as soon as one is (even empty)
//! - `Vec<T>`: split on the separator, `|` unless the tag sets `separator=`
//!
//! # Example
//!
//! ```rust
//! use envset::{Env, EnvSet};
//!
//! #[derive(Debug, Default, Env)]
//! pub struct Config {
//!     #[env("HOME")]
//!     pub home: String,
//!
//!     #[env("PORT,default=8080")]
//!     pub port: u16,
//!
//!     #[env("DEBUG")]
//!     pub debug: Option<bool>,
//!
//!     // Not bound to any variable
//!     pub extra: String,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut es = envset::environ_to_env_set(["HOME=/home/test", "EDITOR=vim"])?;
//! let mut config = Config::default();
//! envset::unmarshal(&mut es, &mut config)?;
//!
//! assert_eq!(config.home, "/home/test");
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.debug, None);
//! assert_eq!(es, EnvSet::from([("EDITOR".to_string(), "vim".to_string())]));
//!
//! let es = envset::marshal(&config)?;
//! assert_eq!(es["PORT"], "8080");
//! assert!(!es.contains_key("DEBUG"));
//! #     Ok(())
//! # }
//! ```
//!
//! # Tags
//!
//! ```text
//! #[env("KEY1[,KEY2,...][,default=<literal>][,required=true|false][,separator=<text>]")]
//! ```
//!
//! ## Candidate keys
//!
//! Keys are tried in order and the first one present is used. [`marshal`] writes the
//! first key only.
//!
//! ```rust
//! # use envset::Env;
//! #[derive(Default, Env)]
//! pub struct Config {
//!     #[env("npm_config_cache,NPM_CONFIG_CACHE")]
//!     pub cache: String,
//! }
//! ```
//!
//! ## `default=<literal>`
//!
//! Used as the raw value when no key is present. The literal runs to the end of its
//! segment and may contain `=`.
//!
//! ## `required=true`
//!
//! Fail with [`EnvError::MissingRequiredValue`], naming the first key, when no key is
//! present and there is no default.
//!
//! ```rust
//! # use envset::{Env, EnvError, EnvSet};
//! #[derive(Default, Env)]
//! pub struct Config {
//!     #[env("DATABASE_URL,required=true")]
//!     pub database_url: String,
//! }
//!
//! let result = envset::unmarshal(&mut EnvSet::new(), &mut Config::default());
//! assert!(matches!(result, Err(EnvError::MissingRequiredValue { key }) if key == "DATABASE_URL"));
//! ```
//!
//! ## `separator=<text>`
//!
//! Delimiter for `Vec<T>` fields.
//!
//! # Attributes
//!
//! - `#[env(nested)]`: the field is a struct deriving [`Env`]; its fields share the same
//!   [`EnvSet`]
//! - `#[env("TAG", deserializer = "path")]`: decode with `fn(&str) -> Result<T, E>`
//! - `#[env("TAG", serializer = "path")]`: encode with `fn(&T) -> Result<String, E>`
//!
//! Tagged fields must be `pub`, otherwise decoding fails with
//! [`EnvError::UnexportedField`].

extern crate self as envset;

#[doc(hidden)]
pub mod de;
pub mod duration;
mod env;
mod error;
#[doc(hidden)]
pub mod ser;
pub mod tag;
mod transform;
mod value;

pub use env::{decode, marshal, unmarshal, unmarshal_from_environ, Env};
pub use envset_derive::Env;
pub use error::{BoxError, EnvError};
pub use transform::{
    env_set_to_environ, environ, environ_to_env_set, ChangeSet, EnvSet, EnvSetExt,
};
pub use value::EnvValue;

// Re-export for application code and examples
#[doc(hidden)]
pub use anyhow;
