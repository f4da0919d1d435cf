//! The [`Env`] trait and the marshalling entry points

use crate::error::EnvError;
use crate::transform::{self, EnvSet};

/// A struct whose fields are bound to environment variables.
///
/// Usually implemented with `#[derive(Env)]`; see the [`de`](crate::de) module for a
/// hand-written implementation.
pub trait Env {
    /// Set fields from `es`, removing every entry that was bound to a field.
    ///
    /// Processing stops at the first error. Fields set before the error keep their
    /// new values.
    fn unmarshal_env(&mut self, es: &mut EnvSet) -> Result<(), EnvError>;

    /// Write tagged fields into `es`.
    fn marshal_env(&self, es: &mut EnvSet) -> Result<(), EnvError>;
}

/// A `None` record is an invalid target.
impl<T: Env> Env for Option<T> {
    fn unmarshal_env(&mut self, es: &mut EnvSet) -> Result<(), EnvError> {
        self.as_mut()
            .ok_or(EnvError::InvalidValue)?
            .unmarshal_env(es)
    }

    fn marshal_env(&self, es: &mut EnvSet) -> Result<(), EnvError> {
        self.as_ref().ok_or(EnvError::InvalidValue)?.marshal_env(es)
    }
}

impl<T: Env + ?Sized> Env for Box<T> {
    fn unmarshal_env(&mut self, es: &mut EnvSet) -> Result<(), EnvError> {
        (**self).unmarshal_env(es)
    }

    fn marshal_env(&self, es: &mut EnvSet) -> Result<(), EnvError> {
        (**self).marshal_env(es)
    }
}

impl<T: Env + ?Sized> Env for &mut T {
    fn unmarshal_env(&mut self, es: &mut EnvSet) -> Result<(), EnvError> {
        (**self).unmarshal_env(es)
    }

    fn marshal_env(&self, es: &mut EnvSet) -> Result<(), EnvError> {
        (**self).marshal_env(es)
    }
}

/// Set the fields of `v` from `es`.
///
/// Entries bound to a field are removed from `es`, leaving the variables that no
/// field claimed. Defaults are not taken from `es` and remove nothing.
///
/// # Errors
///
/// - [`EnvError::InvalidValue`] if `v` is a `None` record
/// - [`EnvError::UnexportedField`] if a tagged field is not `pub`
/// - [`EnvError::MissingRequiredValue`] if a required variable is not set
/// - Any conversion error of a field's value, unchanged
pub fn unmarshal<T: Env + ?Sized>(es: &mut EnvSet, v: &mut T) -> Result<(), EnvError> {
    v.unmarshal_env(es)
}

/// Set the fields of `v` from `es` and return the variables no field claimed.
pub fn decode<T: Env + ?Sized>(mut es: EnvSet, v: &mut T) -> Result<EnvSet, EnvError> {
    unmarshal(&mut es, v)?;
    tracing::debug!(leftover = es.len(), "decoded environment");
    Ok(es)
}

/// Set the fields of `v` from the process environment.
///
/// Returns the variables no field claimed. The process environment is not modified.
pub fn unmarshal_from_environ<T: Env + ?Sized>(v: &mut T) -> Result<EnvSet, EnvError> {
    let es = transform::environ_to_env_set(transform::environ())?;
    decode(es, v)
}

/// Build an [`EnvSet`] from the tagged fields of `v`.
///
/// Each field is written under the first key of its tag. `None` fields are omitted.
pub fn marshal<T: Env + ?Sized>(v: &T) -> Result<EnvSet, EnvError> {
    let mut es = EnvSet::new();
    v.marshal_env(&mut es)?;
    Ok(es)
}
