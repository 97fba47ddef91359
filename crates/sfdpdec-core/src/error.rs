//! Error types for sfdpdec-core
//!
//! This module provides a no_std compatible error type that can be used
//! throughout the crate.

use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Buffer is shorter than the signature block plus one parameter header
    TooShort {
        /// Number of bytes available
        len: usize,
    },
    /// First four bytes are not "SFDP"
    InvalidSignature,
    /// Buffer ends before a declared parameter header
    TruncatedInput {
        /// Index of the parameter header that could not be read
        index: usize,
        /// Bytes required to read that header
        needed: usize,
        /// Bytes actually available
        available: usize,
    },
    /// Output sink rejected a write
    Format,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => write!(
                f,
                "SFDP too short (expect at least {} bytes, got {})",
                crate::sfdp::MIN_SFDP_LEN,
                len
            ),
            Self::InvalidSignature => write!(f, "bad SFDP header"),
            Self::TruncatedInput {
                index,
                needed,
                available,
            } => write!(
                f,
                "parameter header {} truncated (need {} bytes, have {})",
                index, needed, available
            ),
            Self::Format => write!(f, "failed to write output"),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::Format
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
