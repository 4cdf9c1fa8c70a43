//! Access to the flat external parameter set
//!
//! The controller never caches object parameters: every activation reads
//! them again through a [`ParameterSource`], so changes made while the
//! objects are parked are picked up on the next start.
//!
//! A parameter that is unset and one that is set with an unusable value are
//! different failures: the `require_*` and `*_or` helpers report the first
//! as [`ControllerError::MissingParameter`] (or fall back to a default) and
//! the second as [`ControllerError::InvalidParameter`].

use std::collections::HashMap;

use crate::error::{ControllerError, ControllerResult};

/// A read-only view of a flat parameter set
pub trait ParameterSource: Send + Sync {
    /// Raw value of a parameter, `None` when it is unset
    fn get(&self, name: &str) -> Option<ParameterValue>;

    /// Read a floating point parameter. Integer values are accepted.
    fn get_f64(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            ParameterValue::Double(value) => Some(value),
            ParameterValue::Integer(value) => Some(value as f64),
            ParameterValue::String(_) => None,
        }
    }

    /// Read an integer parameter
    fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            ParameterValue::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Read a string parameter
    fn get_string(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            ParameterValue::String(value) => Some(value),
            _ => None,
        }
    }
}

/// Value of a single parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Integer(i64),
    Double(f64),
    String(String),
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Integer(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Double(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::String(value)
    }
}

/// In-memory parameter set
#[derive(Debug, Clone, Default)]
pub struct ParameterTable {
    values: HashMap<String, ParameterValue>,
}

impl ParameterTable {
    pub fn new() -> Self {
        ParameterTable::default()
    }

    /// Set a parameter, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder style [`ParameterTable::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<ParameterValue> {
        self.values.remove(name)
    }
}

impl ParameterSource for ParameterTable {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        self.values.get(name).cloned()
    }
}

fn missing(name: &str) -> ControllerError {
    ControllerError::MissingParameter {
        name: name.to_string(),
    }
}

fn invalid(name: &str, expected: &str, value: &ParameterValue) -> ControllerError {
    ControllerError::InvalidParameter {
        name: name.to_string(),
        reason: format!("expected {}, got {:?}", expected, value),
    }
}

fn as_f64(name: &str, value: ParameterValue) -> ControllerResult<f64> {
    match value {
        ParameterValue::Double(v) => Ok(v),
        ParameterValue::Integer(v) => Ok(v as f64),
        other => Err(invalid(name, "a number", &other)),
    }
}

fn as_string(name: &str, value: ParameterValue) -> ControllerResult<String> {
    match value {
        ParameterValue::String(v) => Ok(v),
        other => Err(invalid(name, "a string", &other)),
    }
}

/// Integers, and doubles with no fractional part, that fit a `usize`
fn as_count(name: &str, value: ParameterValue) -> ControllerResult<usize> {
    let count = match &value {
        ParameterValue::Integer(v) => usize::try_from(*v).ok(),
        ParameterValue::Double(v)
            if v.is_finite() && *v >= 0.0 && v.fract() == 0.0 && *v <= usize::MAX as f64 =>
        {
            Some(*v as usize)
        }
        _ => None,
    };
    count.ok_or_else(|| invalid(name, "a non-negative integer", &value))
}

pub fn require_f64(params: &dyn ParameterSource, name: &str) -> ControllerResult<f64> {
    as_f64(name, params.get(name).ok_or_else(|| missing(name))?)
}

pub fn require_string(params: &dyn ParameterSource, name: &str) -> ControllerResult<String> {
    as_string(name, params.get(name).ok_or_else(|| missing(name))?)
}

/// Read a required non-negative count
pub fn require_count(params: &dyn ParameterSource, name: &str) -> ControllerResult<usize> {
    as_count(name, params.get(name).ok_or_else(|| missing(name))?)
}

/// Read a number, falling back to `default` when unset
pub fn f64_or(params: &dyn ParameterSource, name: &str, default: f64) -> ControllerResult<f64> {
    params.get(name).map_or(Ok(default), |value| as_f64(name, value))
}

/// Read a string, falling back to `default` when unset
pub fn string_or(
    params: &dyn ParameterSource,
    name: &str,
    default: String,
) -> ControllerResult<String> {
    params.get(name).map_or(Ok(default), |value| as_string(name, value))
}

/// Read a non-negative count, falling back to `default` when unset
pub fn count_or(params: &dyn ParameterSource, name: &str, default: usize) -> ControllerResult<usize> {
    params.get(name).map_or(Ok(default), |value| as_count(name, value))
}
