//! Tree navigation: reading and writing nodes addressed by a [`Path`].
//!
//! Walks are strictly left to right, one pass, no backtracking; the first
//! failing step aborts the call and reports the path prefix that locates the
//! failure.
//!
//! Writes follow two asymmetric rules:
//!
//! - **Objects may grow.** A missing key on an intermediate object
//!   auto-creates an empty object and the walk continues; the final key
//!   inserts or overwrites unconditionally.
//! - **Arrays never grow.** An index step must land inside the existing
//!   array, on writes as well as reads; there is no append.
//!
//! Existing nodes are never converted between kinds: a key step on a
//! non-object and an index step on a non-array are errors even mid-write.

use serde_json::{Map, Value};

use crate::error::{NestpathError, Result};
use crate::path::{Path, Step};

/// Fetch the node addressed by `path`, never mutating the tree.
///
/// Fails with [`KeyNotFound`](NestpathError::KeyNotFound),
/// [`IndexOutOfBounds`](NestpathError::IndexOutOfBounds),
/// [`NotAnObject`](NestpathError::NotAnObject), or
/// [`NotAnArray`](NestpathError::NotAnArray), each carrying the prefix that
/// locates the failure. An empty path (see [`Path::prefix`]) returns `root`.
pub fn get_at_path<'a>(root: &'a Value, path: &Path) -> Result<&'a Value> {
    let mut current = root;
    for (depth, step) in path.steps().iter().enumerate() {
        current = match step {
            Step::Key(key) => match current {
                Value::Object(map) => map
                    .get(key)
                    .ok_or_else(|| NestpathError::key_not_found(path.prefix(depth + 1)))?,
                other => return Err(NestpathError::not_an_object(path.prefix(depth), other)),
            },
            Step::Index(index) => match current {
                Value::Array(items) => items.get(*index).ok_or_else(|| {
                    NestpathError::index_out_of_bounds(path.prefix(depth), *index, items.len())
                })?,
                other => return Err(NestpathError::not_an_array(path.prefix(depth), other)),
            },
        };
    }
    Ok(current)
}

/// Mutable variant of [`get_at_path`]: same walk, same errors, and no
/// auto-creation. Useful for editing a container in place without replacing
/// it wholesale.
pub fn get_at_path_mut<'a>(root: &'a mut Value, path: &Path) -> Result<&'a mut Value> {
    let mut current = root;
    for (depth, step) in path.steps().iter().enumerate() {
        current = match step {
            Step::Key(key) => match current {
                Value::Object(map) => map
                    .get_mut(key)
                    .ok_or_else(|| NestpathError::key_not_found(path.prefix(depth + 1)))?,
                other => return Err(NestpathError::not_an_object(path.prefix(depth), other)),
            },
            Step::Index(index) => match current {
                Value::Array(items) => {
                    let len = items.len();
                    items.get_mut(*index).ok_or_else(|| {
                        NestpathError::index_out_of_bounds(path.prefix(depth), *index, len)
                    })?
                }
                other => return Err(NestpathError::not_an_array(path.prefix(depth), other)),
            },
        };
    }
    Ok(current)
}

/// Write `value` at the node addressed by `path`, replacing whatever was
/// there.
///
/// All but the last step walk as [`get_at_path_mut`] does, except that a
/// missing key on an intermediate object auto-creates an empty object. The
/// last step then applies destructively: a key inserts or overwrites, an
/// index overwrites an in-bounds element.
///
/// A failed write is not rolled back: intermediate objects created by the
/// steps before the failure stay in the tree. An empty path is rejected
/// (there is no final step to apply).
pub fn set_at_path(root: &mut Value, path: &Path, value: Value) -> Result<()> {
    let Some((last, walk)) = path.steps().split_last() else {
        return Err(NestpathError::invalid_path(path.to_string(), 0, "empty path"));
    };

    let mut current = root;
    for (depth, step) in walk.iter().enumerate() {
        current = descend_or_create(current, step, path, depth)?;
    }

    match last {
        Step::Key(key) => match current {
            Value::Object(map) => {
                map.insert(key.clone(), value);
                Ok(())
            }
            other => Err(NestpathError::not_an_object(
                path.prefix(path.len() - 1),
                other,
            )),
        },
        Step::Index(index) => match current {
            Value::Array(items) => {
                let len = items.len();
                match items.get_mut(*index) {
                    Some(slot) => {
                        *slot = value;
                        Ok(())
                    }
                    None => Err(NestpathError::index_out_of_bounds(
                        path.prefix(path.len() - 1),
                        *index,
                        len,
                    )),
                }
            }
            other => Err(NestpathError::not_an_array(
                path.prefix(path.len() - 1),
                other,
            )),
        },
    }
}

/// One intermediate step of a write walk. Key steps vivify missing entries
/// with an empty object; index steps are bounds-checked and never extend the
/// array.
fn descend_or_create<'a>(
    current: &'a mut Value,
    step: &Step,
    path: &Path,
    depth: usize,
) -> Result<&'a mut Value> {
    match step {
        Step::Key(key) => match current {
            Value::Object(map) => Ok(map
                .entry(key.as_str())
                .or_insert_with(|| Value::Object(Map::new()))),
            other => Err(NestpathError::not_an_object(path.prefix(depth), other)),
        },
        Step::Index(index) => match current {
            Value::Array(items) => {
                let len = items.len();
                items.get_mut(*index).ok_or_else(|| {
                    NestpathError::index_out_of_bounds(path.prefix(depth), *index, len)
                })
            }
            other => Err(NestpathError::not_an_array(path.prefix(depth), other)),
        },
    }
}
