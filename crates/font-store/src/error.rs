//! Error types for font store operations.

use std::{io, path::PathBuf, result};

use read_fonts::ReadError;

/// Errors that can occur while loading, editing or saving a font model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid font model: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("unsupported font format: {0}")]
    UnsupportedFormat(String),

    #[error("no glyph named '{0}'")]
    UnknownGlyph(String),

    #[error("glyph '{0}' already exists")]
    DuplicateGlyph(String),

    #[error("code point U+{0:04X} is already mapped")]
    DuplicateCodepoint(u32),
}

pub type Result<T> = result::Result<T, Error>;
