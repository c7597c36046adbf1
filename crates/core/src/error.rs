use std::io;

/// Errors that can occur at the fallible edges of pathnorm
///
/// Path normalization and absolutization never fail; these variants cover
/// loading and saving settings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for pathnorm operations
pub type Result<T> = std::result::Result<T, Error>;
