//! The document shell: an exclusively-owned object root plus the string-path
//! API.
//!
//! A [`Document`] owns one JSON tree whose top level is always an object; no
//! top-level arrays or scalars. Each path call parses the string once, then
//! hands the parsed [`Path`] to [`navigate`](crate::navigate). Textual JSON
//! is entirely `serde_json`'s job: this module only decides *when* to decode
//! and encode and enforces the object-root rule on the way in.

use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::access;
use crate::error::{NestpathError, Result};
use crate::navigate::{get_at_path, set_at_path};
use crate::path::Path;

/// A mutable JSON tree with an object root, addressed by `a.b[2].c` paths.
///
/// ```rust
/// use nestpath_core::Document;
///
/// let mut doc = Document::new();
/// doc.set("server.host", "localhost").unwrap();
/// doc.set("server.ports", vec![8080, 8081]).unwrap();
/// doc.set("server.ports[1]", 9090).unwrap();
///
/// assert_eq!(doc.get_str("server.host").unwrap(), "localhost");
/// assert_eq!(doc.get_i64("server.ports[1]").unwrap(), 9090);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    // Invariant: always a `Value::Object`. Every constructor establishes it,
    // and no method hands out a way to replace the root wholesale.
    root: Value,
}

impl Document {
    /// An empty document: `{}`.
    pub fn new() -> Document {
        Document {
            root: Value::Object(Map::new()),
        }
    }

    /// Take exclusive ownership of an existing object as the root.
    pub fn from_object(root: Map<String, Value>) -> Document {
        Document {
            root: Value::Object(root),
        }
    }

    // ---- codec delegation -------------------------------------------------

    /// Decode a document from JSON bytes.
    ///
    /// Fails if the bytes are not valid JSON, or if the top-level value is
    /// anything other than an object.
    pub fn decode(bytes: &[u8]) -> Result<Document> {
        let value: Value = serde_json::from_slice(bytes)?;
        Document::try_from(value)
    }

    /// Decode a document from JSON text. Same rules as [`Document::decode`].
    pub fn decode_str(text: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(text)?;
        Document::try_from(value)
    }

    /// Encode to compact JSON bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.root)?)
    }

    /// Encode to a compact JSON string.
    pub fn encode_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.root)?)
    }

    /// Encode to pretty-printed JSON bytes (two-space indent).
    pub fn encode_pretty(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.root)?)
    }

    /// Encode to a pretty-printed JSON string (two-space indent).
    pub fn encode_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    // ---- path access ------------------------------------------------------

    /// Fetch the node at `path` without mutating anything.
    pub fn get(&self, path: &str) -> Result<&Value> {
        let parsed = Path::parse(path)?;
        get_at_path(&self.root, &parsed)
    }

    /// Write `value` at `path`, replacing whatever was there.
    ///
    /// Missing intermediate object keys are auto-created as empty objects;
    /// existing non-object intermediates are never converted, and array
    /// indices must already be in bounds (arrays never grow). Intermediates
    /// created before a failing step are not rolled back.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let parsed = Path::parse(path)?;
        set_at_path(&mut self.root, &parsed, value.into())
    }

    /// Fetch `path` and narrow it to a string slice.
    pub fn get_str(&self, path: &str) -> Result<&str> {
        let parsed = Path::parse(path)?;
        access::require_str(&parsed, get_at_path(&self.root, &parsed)?)
    }

    /// Fetch `path` and narrow it to an integer (floats truncate toward
    /// zero).
    pub fn get_i64(&self, path: &str) -> Result<i64> {
        let parsed = Path::parse(path)?;
        access::require_i64(&parsed, get_at_path(&self.root, &parsed)?)
    }

    /// Fetch `path` and narrow it to a float (integers widen).
    pub fn get_f64(&self, path: &str) -> Result<f64> {
        let parsed = Path::parse(path)?;
        access::require_f64(&parsed, get_at_path(&self.root, &parsed)?)
    }

    /// Fetch `path` and narrow it to a boolean.
    pub fn get_bool(&self, path: &str) -> Result<bool> {
        let parsed = Path::parse(path)?;
        access::require_bool(&parsed, get_at_path(&self.root, &parsed)?)
    }

    /// Fetch `path` and narrow it to an array.
    pub fn get_array(&self, path: &str) -> Result<&Vec<Value>> {
        let parsed = Path::parse(path)?;
        access::require_array(&parsed, get_at_path(&self.root, &parsed)?)
    }

    /// Fetch `path` and narrow it to an object.
    pub fn get_object(&self, path: &str) -> Result<&Map<String, Value>> {
        let parsed = Path::parse(path)?;
        access::require_object(&parsed, get_at_path(&self.root, &parsed)?)
    }

    // ---- escape hatch -----------------------------------------------------

    /// The live root object, borrowed.
    pub fn data(&self) -> &Map<String, Value> {
        match &self.root {
            Value::Object(map) => map,
            _ => unreachable!("document root is always an object"),
        }
    }

    /// The live root object, mutably borrowed.
    ///
    /// This is a deliberate escape hatch: edits made through it bypass path
    /// validation entirely. The borrow is of the real root, not a copy, so
    /// later path calls observe every change. The root itself stays an
    /// object (only its contents are reachable from here).
    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        match &mut self.root {
            Value::Object(map) => map,
            _ => unreachable!("document root is always an object"),
        }
    }

    /// Consume the document and return the root object.
    pub fn into_object(self) -> Map<String, Value> {
        match self.root {
            Value::Object(map) => map,
            _ => unreachable!("document root is always an object"),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Map<String, Value>> for Document {
    fn from(root: Map<String, Value>) -> Self {
        Document::from_object(root)
    }
}

impl TryFrom<Value> for Document {
    type Error = NestpathError;

    /// Accepts only `Value::Object`; anything else reports the kind it found.
    fn try_from(value: Value) -> Result<Document> {
        match value {
            Value::Object(_) => Ok(Document { root: value }),
            other => Err(NestpathError::root_not_object(&other)),
        }
    }
}

impl FromStr for Document {
    type Err = NestpathError;

    fn from_str(s: &str) -> Result<Document> {
        Document::decode_str(s)
    }
}

/// A document serializes as its root object, so it embeds directly in larger
/// serde structures.
impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let root = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Document::from_object(root))
    }
}
