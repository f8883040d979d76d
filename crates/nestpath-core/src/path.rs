//! Path syntax: parsing `a.b[2].c` into typed steps.
//!
//! A path addresses exactly one node in a JSON tree. The grammar:
//!
//! ```text
//! path     := segment ('.' segment)*
//! segment  := key index*  |  index+
//! key      := [A-Za-z0-9_]+
//! index    := '[' digit+ ']'
//! ```
//!
//! A key-less segment (pure indices, e.g. `[0][1]`) is only allowed at the
//! very start of a path; after a `.` the segment must begin with a key, so
//! `a[0].[1]` is rejected. Brackets attach directly to their key (`a[0]`,
//! never `a.[0]`), and any character outside the grammar's alphabet is an
//! error: the grammar above is the complete accepted language.
//!
//! Parsing is total. Any input yields either a complete [`Path`] or an
//! [`InvalidPath`](crate::NestpathError::InvalidPath) carrying the byte
//! offset of the offending character (the input length when the path ends
//! too early). There are no partial results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NestpathError, Result};

/// One access step of a parsed path.
///
/// Serialized untagged, so a path round-trips through JSON as a plain
/// heterogeneous list: `a.b[2]` becomes `["a","b",2]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    /// Descend into an object by key.
    Key(String),
    /// Descend into an array by zero-based index.
    Index(usize),
}

/// A parsed path: a sequence of [`Step`]s applied left to right.
///
/// Paths come from [`Path::parse`] (or `str::parse`); there is no push/build
/// surface, so a `Path` in user hands always satisfies the grammar and is
/// never empty. `Display` renders the compact syntax back, and re-parsing
/// the rendering yields an equal path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// Parse the compact path syntax into a sequence of steps.
    ///
    /// ```rust
    /// use nestpath_core::{Path, Step};
    ///
    /// let path = Path::parse("users[0].name").unwrap();
    /// assert_eq!(
    ///     path.steps(),
    ///     &[
    ///         Step::Key("users".into()),
    ///         Step::Index(0),
    ///         Step::Key("name".into()),
    ///     ]
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Path> {
        parse_path(input)
    }

    /// The steps, in traversal order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True only for the degenerate root path returned by `prefix(0)`;
    /// parsed paths always hold at least one step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The first `n` steps as a new path (`n` is capped at `len()`).
    ///
    /// Navigation errors use prefixes to point at the node where a walk
    /// failed. `prefix(0)` is the root path, which displays as `$`.
    pub fn prefix(&self, n: usize) -> Path {
        Path {
            steps: self.steps[..n.min(self.steps.len())].to_vec(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("$");
        }
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Step::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = NestpathError;

    fn from_str(s: &str) -> Result<Path> {
        parse_path(s)
    }
}

/// Scanner states. One state per position class of the grammar; every
/// character either advances the machine or fails at its offset.
#[derive(Clone, Copy)]
enum State {
    /// At the very beginning: a key or a leading `[` may start the path.
    Start,
    /// Inside a key run.
    InKey,
    /// Just consumed `.`: a key must follow.
    AfterDot,
    /// Just consumed `[`: a digit must follow.
    AfterOpen,
    /// Inside an index digit run.
    InIndex,
    /// Just consumed `]`: `.`, `[`, or end of input may follow.
    AfterClose,
}

fn parse_path(input: &str) -> Result<Path> {
    let mut steps = Vec::new();
    let mut state = State::Start;
    // Byte offset where the current key or digit run began.
    let mut run_start = 0;

    for (pos, ch) in input.char_indices() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '_' => match state {
                State::Start | State::AfterDot => {
                    run_start = pos;
                    state = State::InKey;
                }
                State::InKey => {}
                State::AfterOpen => {
                    if !ch.is_ascii_digit() {
                        return Err(fail(input, pos, "expected digit"));
                    }
                    run_start = pos;
                    state = State::InIndex;
                }
                State::InIndex => {
                    if !ch.is_ascii_digit() {
                        return Err(fail(input, pos, "expected digit or ']'"));
                    }
                }
                State::AfterClose => {
                    return Err(fail(input, pos, "expected '.', '[', or end of path"));
                }
            },
            '.' => match state {
                State::InKey => {
                    steps.push(Step::Key(input[run_start..pos].to_string()));
                    state = State::AfterDot;
                }
                State::AfterClose => state = State::AfterDot,
                State::Start | State::AfterDot => {
                    return Err(fail(input, pos, "empty segment"));
                }
                State::AfterOpen => return Err(fail(input, pos, "expected digit")),
                State::InIndex => return Err(fail(input, pos, "expected digit or ']'")),
            },
            '[' => match state {
                State::Start | State::AfterClose => state = State::AfterOpen,
                State::InKey => {
                    steps.push(Step::Key(input[run_start..pos].to_string()));
                    state = State::AfterOpen;
                }
                State::AfterDot => {
                    return Err(fail(input, pos, "segment after '.' must start with a key"));
                }
                State::AfterOpen => return Err(fail(input, pos, "expected digit")),
                State::InIndex => return Err(fail(input, pos, "expected digit or ']'")),
            },
            ']' => match state {
                State::InIndex => {
                    let index: usize = input[run_start..pos]
                        .parse()
                        .map_err(|_| fail(input, run_start, "index out of range"))?;
                    steps.push(Step::Index(index));
                    state = State::AfterClose;
                }
                State::AfterOpen => return Err(fail(input, pos, "empty index")),
                _ => return Err(fail(input, pos, "unexpected ']'")),
            },
            _ => return Err(fail(input, pos, format!("invalid character {ch:?}"))),
        }
    }

    // End of input: only a finished key or a closed bracket is a valid stop.
    match state {
        State::InKey => {
            steps.push(Step::Key(input[run_start..].to_string()));
            Ok(Path { steps })
        }
        State::AfterClose => Ok(Path { steps }),
        State::Start => Err(fail(input, input.len(), "empty path")),
        State::AfterDot => Err(fail(input, input.len(), "trailing '.'")),
        State::AfterOpen | State::InIndex => Err(fail(input, input.len(), "unterminated index")),
    }
}

fn fail(input: &str, pos: usize, message: impl Into<String>) -> NestpathError {
    NestpathError::invalid_path(input, pos, message)
}
