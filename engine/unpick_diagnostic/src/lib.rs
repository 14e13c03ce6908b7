//! Error types shared by the unpick lexer, parser, and reader entry points.
//!
//! Every syntax problem is reported as a single [`ParseError`] carrying a
//! 1-based line and column plus an [`ErrorKind`]. The `Display` form is
//! `line:column: message`, which is what tooling built on the reader greps
//! for.

use std::io;

use thiserror::Error;

mod kind;

pub use kind::ErrorKind;

/// A positioned syntax or validation error.
///
/// `line` and `column` are 1-based and refer to the offending token or
/// character in the source text, not to the start of the enclosing item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {kind}")]
pub struct ParseError {
    pub line: u32,
    pub column: u32,
    pub kind: ErrorKind,
}

impl ParseError {
    pub fn new(kind: ErrorKind, line: u32, column: u32) -> Self {
        ParseError { line, column, kind }
    }

    /// The message without the position prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Result alias used throughout the engine's parsing layers.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for entry points that read from an [`io::Read`].
///
/// I/O errors are propagated unchanged rather than being flattened into a
/// positioned error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
