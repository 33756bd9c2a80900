//! Error types for mdimage library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdimage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rewriting Markdown images.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The alignment name is not one of the supported values.
    #[error("Invalid alignment '{0}'. Choose from: left, center, right")]
    InvalidAlignment(String),

    /// Statistics could not be encoded.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}
