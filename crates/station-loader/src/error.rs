//! Load Error Types

use thiserror::Error;

/// Errors during the one-time data load. All fatal at initialization.
#[derive(Debug, Error)]
pub enum LoadError {
    /// HTTP transport failure reaching the data source.
    #[error("data source request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Data source answered with a non-success status.
    #[error("data source returned HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Local file could not be read.
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    /// Payload was not a JSON array of station records.
    #[error("malformed station payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
