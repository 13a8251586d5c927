//! Error types for the picozip library.

use std::fmt;

/// Result type alias for picozip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing an archive or inflating a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Malformed DEFLATE stream or ZIP structure.
    Format(&'static str),
    /// A read past the end of the input was attempted.
    UnexpectedEof,
    /// The output buffer is too small for the decoded data.
    OutputOverflow,
    /// Decoded length differs from the length declared in the file header.
    LengthMismatch {
        /// Length from the file header.
        expected: u32,
        /// Length actually produced.
        actual: u32,
    },
    /// CRC-32 of the decoded data differs from the stored checksum.
    CrcMismatch {
        /// Checksum stored in the archive.
        expected: u32,
        /// Checksum of the decoded data.
        actual: u32,
    },
    /// Entry uses a compression method other than store or deflate.
    UnsupportedMethod(u16),
    /// No archive entry matched the requested name or index.
    EntryNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Format(msg) => {
                write!(f, "Invalid data: {}", msg)
            }
            Error::UnexpectedEof => {
                write!(f, "Unexpected end of input")
            }
            Error::OutputOverflow => {
                write!(f, "Output buffer too small for decoded data")
            }
            Error::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Decoded length mismatch: header says {} bytes, got {}",
                    expected, actual
                )
            }
            Error::CrcMismatch { expected, actual } => {
                write!(
                    f,
                    "CRC-32 mismatch: expected {:08X}, got {:08X}",
                    expected, actual
                )
            }
            Error::UnsupportedMethod(method) => {
                write!(f, "Unsupported compression method {}", method)
            }
            Error::EntryNotFound => {
                write!(f, "Archive entry not found")
            }
        }
    }
}

impl std::error::Error for Error {}
