//! Parameter Store - application-wide settings read by the manager
//!
//! The store is handed to the manager explicitly. It is read-only for the
//! lifetime of a request.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Failure to read a key from a parameter store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationKeyError {
    #[error("Invalid parameter key: {0:?}")]
    InvalidKey(String),

    #[error("Parameter store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Failure to build a [`Params`] store.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("Failed to read params: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse params: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Params must be a JSON object")]
    NotAnObject,

    #[error("App config has no \"params\" object")]
    MissingParamsSection,
}

/// Read access to named parameters.
///
/// `Ok(None)` means the key is not set. Errors are reserved for a store that
/// cannot answer at all, or a key it refuses to look up.
pub trait ParamStore {
    fn param(&self, key: &str) -> Result<Option<Value>, ConfigurationKeyError>;
}

impl<T: ParamStore + ?Sized> ParamStore for &T {
    fn param(&self, key: &str) -> Result<Option<Value>, ConfigurationKeyError> {
        (**self).param(key)
    }
}

impl ParamStore for HashMap<String, Value> {
    fn param(&self, key: &str) -> Result<Option<Value>, ConfigurationKeyError> {
        check_key(key)?;
        Ok(self.get(key).cloned())
    }
}

/// Rejects keys no store can hold.
pub fn check_key(key: &str) -> Result<(), ConfigurationKeyError> {
    if key.trim().is_empty() {
        return Err(ConfigurationKeyError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// JSON-backed parameter store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: Map<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Build from a flat JSON object of params. Every key is kept as is.
    pub fn from_value(value: Value) -> Result<Self, ParamsError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            _ => Err(ParamsError::NotAnObject),
        }
    }

    /// Build from an application config, taking its top-level `"params"`
    /// object.
    pub fn from_app_config(config: Value) -> Result<Self, ParamsError> {
        match config {
            Value::Object(mut map) => match map.remove("params") {
                Some(Value::Object(values)) => Ok(Self { values }),
                _ => Err(ParamsError::MissingParamsSection),
            },
            _ => Err(ParamsError::NotAnObject),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, ParamsError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Load a flat params file.
    pub fn load_from_file(path: &Path) -> Result<Self, ParamsError> {
        let value: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
        let params = Self::from_value(value)?;
        log::debug!("loaded {} params from {}", params.len(), path.display());
        Ok(params)
    }

    /// Load the `"params"` section of an application config file.
    pub fn load_app_config(path: &Path) -> Result<Self, ParamsError> {
        let value: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
        let params = Self::from_app_config(value)?;
        log::debug!("loaded {} params from app config {}", params.len(), path.display());
        Ok(params)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ParamStore for Params {
    fn param(&self, key: &str) -> Result<Option<Value>, ConfigurationKeyError> {
        check_key(key)?;
        Ok(self.values.get(key).cloned())
    }
}
