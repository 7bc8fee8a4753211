use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Per-line problems in a source never end up here; they are
/// collected as [`crate::model::ErrorEntry`] values instead.
#[derive(Error, Debug)]
pub enum FlightError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input file not found: {}", .0.display())]
    InputFileNotFound(PathBuf),

    #[error("Input directory not found: {}", .0.display())]
    InputDirNotFound(PathBuf),

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed JSON in '{}': {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid invocation: {0}")]
    Invocation(String),

    #[error("No flights loaded to run queries against")]
    NoRecords,
}

pub type Result<T> = std::result::Result<T, FlightError>;
