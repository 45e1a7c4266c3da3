//! Dynamically typed values at the text boundary.
//!
//! Arguments arrive as Python literal text (CLI, fixture scripts, config) and
//! are parsed into [`Value`]s. Transforms only accept typed slices, so each
//! list is converted with [`into_bools`] or [`into_strings`] first; a foreign
//! element is rejected here, before anything is mutated.

use serde::Serialize;
use thiserror::Error;

/// A parsed Python literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Python type name, as reported by `type(x).__name__`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

/// Type-contract violations at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// An element does not have the type the transform operates on.
    #[error("element {index}: expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

/// Convert a list of values into booleans.
pub fn into_bools(values: Vec<Value>) -> Result<Vec<bool>, ValueError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch(index, "bool", &other)),
        })
        .collect()
}

/// Convert a list of values into strings.
pub fn into_strings(values: Vec<Value>) -> Result<Vec<String>, ValueError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Str(s) => Ok(s),
            other => Err(mismatch(index, "str", &other)),
        })
        .collect()
}

fn mismatch(index: usize, expected: &'static str, found: &Value) -> ValueError {
    ValueError::TypeMismatch {
        index,
        expected,
        found: found.type_name(),
    }
}
