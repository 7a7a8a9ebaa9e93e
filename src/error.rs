//! Error types for the word oracle and its tool server

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for oracle operations
pub type Result<T> = std::result::Result<T, OracleError>;

#[derive(Debug, Error)]
pub enum OracleError {
    /// Word source file could not be read
    #[error("failed to read word source '{}': {source}", path.display())]
    WordSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Observation or other input file could not be read
    #[error("failed to read input '{}': {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Word source was readable but held nothing usable
    #[error("word source '{0}' contains no usable words")]
    EmptyWordSource(String),

    /// stdin/stdout failure in the tool server
    #[error("transport error: {0}")]
    Transport(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Read a whole file, attributing failures to the path.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| OracleError::Input {
        path: path.to_path_buf(),
        source,
    })
}
