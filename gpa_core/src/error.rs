//! Error types for the gpa_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for gpa_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Results file could not be read
    #[error("cannot read results file {}: {}", .path.display(), .source)]
    Unreadable { path: PathBuf, source: io::Error },

    /// A line failed field-count, credit, or grade validation
    #[error("malformed record on line {line}: {reason} (\"{content}\")")]
    MalformedRecord {
        line: u64,
        content: String,
        reason: String,
    },

    /// No record contributes credits or points; the GPA is undefined
    #[error("no scoring-eligible courses: GPA is undefined")]
    Unscorable,

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
