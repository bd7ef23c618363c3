// src/error.rs
use thiserror::Error;

/// Everything that can fail outside the core. Table extraction, normalization,
/// aggregation and rendering never fail; they skip or blank what they can't use.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected response status: {status} at {url}")]
    Status { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad option value (unknown timezone, negative window, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Neither the primary pages nor the mirrors produced a single usable record.
    #[error("No data available.")]
    NoData,
}

pub type Result<T> = std::result::Result<T, Error>;
