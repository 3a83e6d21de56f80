//! Error types for spicewrap

use std::path::PathBuf;
use thiserror::Error;

/// spicewrap error types
#[derive(Debug, Error)]
pub enum SpiceError {
    /// Wrap width must be a positive number of columns.
    #[error("Invalid width: {0} (must be > 0)")]
    InvalidWidth(usize),
    /// A configuration value could not be interpreted.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// The output path names the input file.
    #[error("Output would overwrite input: {}", .0.display())]
    OutputIsInput(PathBuf),
    /// I/O operation failed while reading or writing lines.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SpiceError>;
