//! Error types for catalog loading

use thiserror::Error;

/// Errors raised while reading a catalog dump
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dump file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The dump is not valid JSON or does not follow the schema
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// The dump contains no editions or no cards
    #[error("Catalog dump is empty")]
    Empty,
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
