//! Domain layer error types
//!
//! All errors that can occur in domain layer operations.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while decoding a Shell Link byte buffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer ended before a fixed-offset field could be read
    #[error("Truncated shortcut: needed {needed} byte(s) at offset {offset}, buffer has {len}")]
    Truncated {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// An offset or size points outside the buffer
    #[error("Malformed shortcut: {0}")]
    Malformed(String),
}

/// Failure while parsing a shortcut file from disk
#[derive(Error, Debug)]
pub enum ShortcutError {
    /// The file could not be read
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a usable shell link
    #[error("Failed to parse {path} as a Windows shortcut: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl ShortcutError {
    /// The underlying parse error, if this was a parse failure
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            ShortcutError::Parse { source, .. } => Some(source),
            ShortcutError::Io { .. } => None,
        }
    }
}
