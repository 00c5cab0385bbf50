//! Error types for `Tincture`
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use thiserror::Error;

/// The error type for `Tincture` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from reading a stylesheet or writing an artifact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Conversion Errors ====================
    /// The requested output format is not one of `hex`, `rgb` or `rgba`.
    #[error("unsupported format: {format}")]
    UnsupportedFormat {
        /// The format string that was requested.
        format: String,
    },
}

/// Result type alias for `Tincture` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message() {
        let err = Error::UnsupportedFormat {
            format: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported format: bogus");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.css");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
        assert!(err.source().is_some());
    }
}
