// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for string (de)serialization.
//!
//! Every failure is surfaced to the caller; nothing is retried or swallowed
//! inside the codec. [`Error::kind`] gives a fieldless classification so
//! callers can tell a short read on a streaming source (wait for more data)
//! apart from a corrupt length prefix (fatal).

use std::fmt;
use std::io;

use crate::config::{LengthPrefix, TextEncoding};

/// Result type for sercore operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Why a length prefix was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    /// A signed prefix decoded to a negative length.
    Negative(i64),
    /// Length exceeds the configured maximum.
    TooLarge { length: u64, max: u64 },
    /// Length does not fit in the configured prefix encoding.
    Unrepresentable { length: u64, prefix: LengthPrefix },
    /// Variable-length integer decoded outside the `i32` range.
    VarIntOverflow(i64),
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthError::Negative(len) => write!(f, "negative length {}", len),
            LengthError::TooLarge { length, max } => {
                write!(f, "length {} exceeds maximum {}", length, max)
            }
            LengthError::Unrepresentable { length, prefix } => {
                write!(f, "length {} cannot be encoded as {:?}", length, prefix)
            }
            LengthError::VarIntOverflow(value) => {
                write!(f, "vint value {} out of i32 range", value)
            }
        }
    }
}

/// Fieldless classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    TruncatedInput,
    MalformedLength,
    Encoding,
    BufferTooSmall,
}

/// Serialization error.
#[derive(Debug)]
pub enum Error {
    /// The underlying sink or source failed.
    Io(io::Error),
    /// Fewer bytes were available than the record declares.
    TruncatedInput { needed: u64, available: u64 },
    /// The length prefix is invalid or out of range.
    MalformedLength(LengthError),
    /// Text could not be converted to or from the configured encoding.
    Encoding {
        encoding: TextEncoding,
        reason: String,
    },
    /// Caller-provided buffer cannot hold the encoded record.
    BufferTooSmall { required: usize, available: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::TruncatedInput { .. } => ErrorKind::TruncatedInput,
            Error::MalformedLength(_) => ErrorKind::MalformedLength,
            Error::Encoding { .. } => ErrorKind::Encoding,
            Error::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
        }
    }

    /// True when more input could complete the record.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Error::TruncatedInput { .. })
    }

    pub(crate) fn encoding(encoding: TextEncoding, reason: impl Into<String>) -> Self {
        Error::Encoding {
            encoding,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::TruncatedInput { needed, available } => write!(
                f,
                "truncated input: needed {} bytes, {} available",
                needed, available
            ),
            Error::MalformedLength(e) => write!(f, "malformed length prefix: {}", e),
            Error::Encoding { encoding, reason } => {
                write!(f, "{} encoding error: {}", encoding.name(), reason)
            }
            Error::BufferTooSmall {
                required,
                available,
            } => write!(
                f,
                "buffer too small: {} bytes required, {} available",
                required, available
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<LengthError> for Error {
    fn from(e: LengthError) -> Self {
        Error::MalformedLength(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_variants() {
        let err = Error::TruncatedInput {
            needed: 10,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "truncated input: needed 10 bytes, 4 available"
        );

        let err = Error::MalformedLength(LengthError::TooLarge {
            length: 2048,
            max: 1024,
        });
        assert_eq!(
            err.to_string(),
            "malformed length prefix: length 2048 exceeds maximum 1024"
        );

        let err = Error::MalformedLength(LengthError::Negative(-5));
        assert_eq!(err.to_string(), "malformed length prefix: negative length -5");

        let err = Error::encoding(TextEncoding::Ascii, "byte 0xC3 at offset 1");
        assert_eq!(err.to_string(), "ascii encoding error: byte 0xC3 at offset 1");
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let errors = [
            Error::Io(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
            Error::TruncatedInput {
                needed: 1,
                available: 0,
            },
            Error::MalformedLength(LengthError::Negative(-1)),
            Error::encoding(TextEncoding::Utf8, "bad"),
            Error::BufferTooSmall {
                required: 2,
                available: 1,
            },
        ];
        let kinds: std::collections::HashSet<ErrorKind> =
            errors.iter().map(Error::kind).collect();
        assert_eq!(kinds.len(), errors.len());
        assert!(errors[1].is_truncation());
        assert!(!errors[2].is_truncation());
    }

    #[test]
    fn test_io_error_source_is_preserved() {
        use std::error::Error as _;
        let err: Error = io::Error::new(io::ErrorKind::Other, "disk full").into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.source().is_some());
    }
}
