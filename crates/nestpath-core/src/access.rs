//! Typed narrowing of fetched nodes.
//!
//! Each function takes the node's full path purely for error context and
//! either returns the requested shape or a
//! [`TypeMismatch`](crate::NestpathError::TypeMismatch) naming what was
//! expected and what was actually there.
//!
//! Numbers are the one place with coercion, mirroring the looseness of
//! dynamically-typed payloads: [`require_i64`] truncates floats toward zero
//! and [`require_f64`] widens integers. Everything else matches exactly; in
//! particular `null` never narrows to anything.

use serde_json::{Map, Value};

use crate::error::{NestpathError, Result};
use crate::path::Path;

/// Narrow to a string slice borrowed from the tree.
pub fn require_str<'a>(path: &Path, value: &'a Value) -> Result<&'a str> {
    match value {
        Value::String(text) => Ok(text),
        other => Err(NestpathError::type_mismatch(path.clone(), "string", other)),
    }
}

/// Narrow to an integer.
///
/// Integral numbers pass through as-is; fractional numbers truncate toward
/// zero (saturating at the `i64` bounds). Non-numbers are a mismatch.
pub fn require_i64(path: &Path, value: &Value) -> Result<i64> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Ok(int)
            } else if let Some(float) = number.as_f64() {
                Ok(float as i64)
            } else {
                Err(NestpathError::type_mismatch(path.clone(), "number", value))
            }
        }
        other => Err(NestpathError::type_mismatch(path.clone(), "number", other)),
    }
}

/// Narrow to a float. Integers widen via `as_f64`; non-numbers are a
/// mismatch.
pub fn require_f64(path: &Path, value: &Value) -> Result<f64> {
    match value.as_f64() {
        Some(float) => Ok(float),
        None => Err(NestpathError::type_mismatch(path.clone(), "number", value)),
    }
}

/// Narrow to a boolean. Exact match only.
pub fn require_bool(path: &Path, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        other => Err(NestpathError::type_mismatch(path.clone(), "boolean", other)),
    }
}

/// Narrow to an array, borrowed from the tree.
pub fn require_array<'a>(path: &Path, value: &'a Value) -> Result<&'a Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(NestpathError::type_mismatch(path.clone(), "array", other)),
    }
}

/// Narrow to an object, borrowed from the tree.
pub fn require_object<'a>(path: &Path, value: &'a Value) -> Result<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(NestpathError::type_mismatch(path.clone(), "object", other)),
    }
}
