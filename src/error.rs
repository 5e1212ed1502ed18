//! Error types shared by the board modules.

use std::path::PathBuf;

use thiserror::Error;

use crate::codec::Format;
use crate::validate::Violation;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Errors from board operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("entity id {id} is already on the board")]
    DuplicateEntityId { id: u64 },
    #[error("no entity with id {id} on the board")]
    EntityNotFound { id: u64 },
    #[error("session has ended, the board no longer accepts changes")]
    SessionEnded,
    #[error("board has {} invalid field(s)", .0.len())]
    Invalid(Vec<Violation>),
}

/// Errors while reading, writing or converting board and config files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot infer a file format from {}", .path.display())]
    UnknownFormat { path: PathBuf },
    #[error("unsupported format {name:?}, expected json or toml")]
    UnsupportedFormat { name: String },
    #[error("{format} deserialization failed: {reason}")]
    Deserialize { format: Format, reason: String },
    #[error("{format} serialization failed: {reason}")]
    Serialize { format: Format, reason: String },
}

/// A direction sign flag other than `1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("direction must be 1 (outward) or -1 (inward), got {0}")]
pub struct DirectionError(pub i8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color is empty")]
    Empty,
    #[error("color {0:?} has surrounding whitespace")]
    SurroundingWhitespace(String),
    #[error("malformed hex color {0:?}")]
    MalformedHex(String),
    #[error("color name {0:?} must contain only ASCII letters")]
    MalformedName(String),
}
