//! Board encoding and file I/O.
//!
//! Two text formats are supported:
//! - JSON: the shape the browser game reads and writes
//! - TOML: hand-editable fixtures and configs

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::entities::GameBoard;
use crate::error::LoadError;
use crate::validate::{validate_board, Violation};

/// Text format of a board or config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| LoadError::UnknownFormat {
                path: path.to_path_buf(),
            })
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl FromStr for Format {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(LoadError::UnsupportedFormat {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Toml => f.write_str("TOML"),
        }
    }
}

/// Encode a value as pretty-printed text
pub fn encode<T: Serialize>(value: &T, format: Format) -> Result<String, LoadError> {
    let encoded = match format {
        Format::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        Format::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
    };
    encoded.map_err(|reason| LoadError::Serialize { format, reason })
}

/// Decode a value from text
pub fn decode<T: DeserializeOwned>(text: &str, format: Format) -> Result<T, LoadError> {
    let decoded = match format {
        Format::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(text).map_err(|e| e.to_string()),
    };
    decoded.map_err(|reason| LoadError::Deserialize { format, reason })
}

/// Encode a board, refusing values `format` cannot represent
///
/// JSON has no NaN or infinity (serde_json would write `null`), and TOML
/// integers stop at `i64::MAX`.
pub fn encode_board(board: &GameBoard, format: Format) -> Result<String, LoadError> {
    let unrepresentable = validate_board(board).into_iter().find(|v| match format {
        Format::Json => matches!(v, Violation::NotFinite { .. }),
        Format::Toml => matches!(v, Violation::OutOfRange { .. }),
    });
    if let Some(violation) = unrepresentable {
        return Err(LoadError::Serialize {
            format,
            reason: violation.to_string(),
        });
    }
    encode(board, format)
}

pub(crate) fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a board, picking the format from the file extension
///
/// The board is not validated; see [`crate::validate`].
pub fn load_board(path: &Path) -> Result<GameBoard, LoadError> {
    let format = Format::from_path(path)?;
    let board: GameBoard = decode(&read_file(path)?, format)?;
    debug!(
        path = %path.display(),
        %format,
        entities = board.entities.as_ref().map_or(0, Vec::len),
        "loaded board"
    );
    Ok(board)
}

/// Save a board, picking the format from the file extension
pub fn save_board(path: &Path, board: &GameBoard) -> Result<(), LoadError> {
    let format = Format::from_path(path)?;
    let text = encode_board(board, format)?;
    std::fs::write(path, text).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), %format, "saved board");
    Ok(())
}
