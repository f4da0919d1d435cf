//! Conversion between raw `KEY=VALUE` lines and [`EnvSet`]

use std::collections::HashMap;

use crate::error::EnvError;

/// A set of environment variables.
pub type EnvSet = HashMap<String, String>;

/// A set of changes to an [`EnvSet`].
///
/// `Some(value)` sets the variable, `None` removes it.
pub type ChangeSet = HashMap<String, Option<String>>;

/// Operations on an [`EnvSet`].
pub trait EnvSetExt {
    /// Apply a [`ChangeSet`] in place.
    fn apply(&mut self, changes: &ChangeSet);
}

impl EnvSetExt for EnvSet {
    fn apply(&mut self, changes: &ChangeSet) {
        for (key, value) in changes {
            match value {
                Some(value) => {
                    self.insert(key.clone(), value.clone());
                }
                None => {
                    self.remove(key);
                }
            }
        }
    }
}

/// Build an [`EnvSet`] from `KEY=VALUE` lines.
///
/// Lines are split on the first `=`, so values may contain `=`. A line without `=`
/// fails the whole conversion with [`EnvError::InvalidFormat`].
pub fn environ_to_env_set<I, S>(environ: I) -> Result<EnvSet, EnvError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let environ = environ.into_iter();
    let mut es = EnvSet::with_capacity(environ.size_hint().0);
    for line in environ {
        let line = line.as_ref();
        let (key, value) = line.split_once('=').ok_or_else(|| EnvError::InvalidFormat {
            line: line.to_string(),
        })?;
        es.insert(key.to_string(), value.to_string());
    }
    Ok(es)
}

/// Format an [`EnvSet`] as `KEY=VALUE` lines, in no particular order.
pub fn env_set_to_environ(es: &EnvSet) -> Vec<String> {
    es.iter().map(|(key, value)| format!("{key}={value}")).collect()
}

/// Snapshot of the current process environment as `KEY=VALUE` lines.
///
/// Keys and values that are not valid UTF-8 are converted lossily.
pub fn environ() -> Vec<String> {
    std::env::vars_os()
        .map(|(key, value)| format!("{}={}", key.to_string_lossy(), value.to_string_lossy()))
        .collect()
}
