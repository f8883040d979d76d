//! # nestpath-core
//!
//! Path-addressed reads and writes over nested JSON values, using the
//! compact `a.b[2].c` syntax.
//!
//! A [`Document`] owns one JSON tree with an object root. Paths parse into
//! typed steps (object keys and array indices), and a single navigator walks
//! or mutates the tree: writes auto-create missing intermediate objects but
//! never grow arrays and never convert an existing node from one kind to
//! another. Typed getters narrow leaves to the scalar or container you
//! expect. Textual JSON is delegated to `serde_json`, with object key order
//! preserved across decode/encode.
//!
//! ## Quick start
//!
//! ```rust
//! use nestpath_core::Document;
//!
//! let mut doc =
//!     Document::decode_str(r#"{"user":{"name":"Alice","scores":[95,87,92]}}"#).unwrap();
//!
//! assert_eq!(doc.get_str("user.name").unwrap(), "Alice");
//! assert_eq!(doc.get_i64("user.scores[2]").unwrap(), 92);
//!
//! doc.set("user.scores[1]", 90).unwrap();
//! doc.set("user.active", true).unwrap();
//! assert_eq!(
//!     doc.encode_string().unwrap(),
//!     r#"{"user":{"name":"Alice","scores":[95,90,92],"active":true}}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`path`] - the `a.b[2].c` grammar: [`Path`], [`Step`], the parser
//! - [`navigate`] - get/set walks over `serde_json::Value` trees
//! - [`access`] - typed narrowing of fetched nodes
//! - [`document`] - [`Document`]: owned object root plus codec delegation
//! - [`error`] - [`NestpathError`] and the crate [`Result`] alias

pub mod access;
pub mod document;
pub mod error;
pub mod navigate;
pub mod path;

pub use document::Document;
pub use error::{value_type_name, NestpathError, Result};
pub use navigate::{get_at_path, get_at_path_mut, set_at_path};
pub use path::{Path, Step};
