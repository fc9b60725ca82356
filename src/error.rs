//! Error types for pautilib

use thiserror::Error;

/// Result type alias for pautilib operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pautilib operations
#[derive(Debug, Error)]
pub enum Error {
    /// A constructor or operation received an argument it cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Logical coordinates fall outside the matrix
    #[error("Coordinates ({coord1}, {coord2}) are outside the matrix")]
    CoordinatesOutOfRange { coord1: isize, coord2: isize },

    /// Linear index falls outside the backing store
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Settings file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed or encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
