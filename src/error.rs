//! Error types for the sfdpdec binary

use thiserror::Error;

/// Errors reported by the command line tool
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or malformed arguments
    #[error("{0}")]
    Usage(#[source] clap::Error),

    /// Failed to open the input file
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the input file
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the report
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),

    /// The SFDP data could not be decoded
    #[error(transparent)]
    Decode(#[from] sfdpdec_core::Error),
}

/// Result type for the command line tool
pub type Result<T> = std::result::Result<T, CliError>;
