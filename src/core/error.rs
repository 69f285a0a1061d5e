//! Error types for the RBF network implementation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RBFError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty sample set")]
    EmptyDataset,

    #[error("Unable to open file \"{0}\" for deserializing")]
    FileAccess(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RBFError>;
