//! Error types for meshview.
//!
//! All crates return `MeshviewResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for meshview.
#[derive(Debug, Error)]
pub enum MeshviewError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A token that should hold a number could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the source file.
        line: usize,
        /// What was expected and what was found.
        message: String,
    },

    /// A face referenced a position index that can never be valid.
    #[error("Invalid vertex index {index} on line {line}")]
    InvalidIndex {
        /// 1-based line number of the offending record (0 if unknown).
        line: usize,
        /// The index as written in the file.
        index: i64,
    },

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MeshviewError {
    /// Builds a [`MeshviewError::Parse`] for `line`.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Convenience alias for `Result<T, MeshviewError>`.
pub type MeshviewResult<T> = Result<T, MeshviewError>;
