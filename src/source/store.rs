/// Config stores: where connection strings come from.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::SourceError;
use super::resolve::resolve_key;

/// Key looked up when no hint is given.
pub const DEFAULT_KEY: &str = "DATABASE_URL";

/// A flat set of string config vars.
pub trait ConfigStore {
    /// All vars, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the backing store cannot be read.
    fn vars(&self) -> Result<BTreeMap<String, String>, SourceError>;
}

/// The current process environment.
#[derive(Debug, Default)]
pub struct EnvStore;

impl ConfigStore for EnvStore {
    /// Vars whose key or value is not valid UTF-8 are skipped.
    fn vars(&self) -> Result<BTreeMap<String, String>, SourceError> {
        Ok(std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect())
    }
}

/// A JSON object of config vars, e.g. saved `heroku config --json` output.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonFileStore {
    fn vars(&self) -> Result<BTreeMap<String, String>, SourceError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| SourceError::ConfigRead {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SourceError::ConfigParse {
            path: self.path.clone(),
            source,
        })
    }
}

/// A config var selected by hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigVar {
    pub key: String,
    pub value: String,
}

/// Look up the connection string for `hint` (or [`DEFAULT_KEY`]).
///
/// # Errors
///
/// Returns `SourceError` if the store cannot be read or the hint does not
/// resolve to exactly one key.
pub fn lookup(store: &dyn ConfigStore, hint: Option<&str>) -> Result<ConfigVar, SourceError> {
    let hint = hint.unwrap_or(DEFAULT_KEY);
    let mut vars = store.vars()?;
    let keys: Vec<String> = vars.keys().cloned().collect();
    let key = resolve_key(&keys, hint)?.to_owned();
    debug!(hint, key = %key, "resolved config var");

    let value = vars.remove(&key).unwrap_or_default();
    Ok(ConfigVar { key, value })
}
