//! Error types for path parsing, navigation, and codec delegation.

use serde_json::Value;
use thiserror::Error;

use crate::path::Path;

/// Errors that can occur while parsing a path, walking a tree, narrowing a
/// value, or delegating to the JSON serializer.
#[derive(Error, Debug)]
pub enum NestpathError {
    /// The path string violates the grammar. `pos` is the byte offset of the
    /// offending character, or the input length when the path ends too early.
    #[error("invalid path {path:?}: {message} at position {pos}")]
    InvalidPath {
        path: String,
        pos: usize,
        message: String,
    },

    /// A key named by the path is absent. `path` runs up to and including the
    /// missing key.
    #[error("key not found: {path}")]
    KeyNotFound { path: Path },

    /// An index step landed outside the array. Arrays never grow through the
    /// navigator, so this fires on writes as well as reads. `path` locates
    /// the array itself.
    #[error("index {index} out of bounds (len {len}) at {path}")]
    IndexOutOfBounds {
        path: Path,
        index: usize,
        len: usize,
    },

    /// A key step was applied to a node that is not an object. `path` locates
    /// the mistyped node.
    #[error("expected object at {path}, found {found}")]
    NotAnObject { path: Path, found: &'static str },

    /// An index step was applied to a node that is not an array. `path`
    /// locates the mistyped node.
    #[error("expected array at {path}, found {found}")]
    NotAnArray { path: Path, found: &'static str },

    /// A typed accessor found a node of the wrong kind.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: Path,
        expected: &'static str,
        found: &'static str,
    },

    /// Decoded input (or a converted value) has a non-object at the top
    /// level; a document root is always an object.
    #[error("root value must be an object, found {found}")]
    RootNotObject { found: &'static str },

    /// A failure forwarded from the JSON serializer, in either direction.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NestpathError {
    #[inline]
    pub fn invalid_path(path: impl Into<String>, pos: usize, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            pos,
            message: message.into(),
        }
    }

    #[inline]
    pub fn key_not_found(path: Path) -> Self {
        Self::KeyNotFound { path }
    }

    #[inline]
    pub fn index_out_of_bounds(path: Path, index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { path, index, len }
    }

    #[inline]
    pub fn not_an_object(path: Path, found: &Value) -> Self {
        Self::NotAnObject {
            path,
            found: value_type_name(found),
        }
    }

    #[inline]
    pub fn not_an_array(path: Path, found: &Value) -> Self {
        Self::NotAnArray {
            path,
            found: value_type_name(found),
        }
    }

    #[inline]
    pub fn type_mismatch(path: Path, expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            path,
            expected,
            found: value_type_name(found),
        }
    }

    #[inline]
    pub fn root_not_object(found: &Value) -> Self {
        Self::RootNotObject {
            found: value_type_name(found),
        }
    }
}

/// Human-readable name of a JSON value's kind, as used in error messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convenience alias used throughout nestpath-core.
pub type Result<T> = std::result::Result<T, NestpathError>;
