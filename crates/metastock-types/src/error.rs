//! Error types for metastock.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for metastock operations.
pub type Result<T> = std::result::Result<T, MetastockError>;

/// Errors raised while decoding raw bytes, before any file context is attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes were available than the field or record requires.
    #[error("Truncated data: needed {needed} bytes at offset {offset}, only {available} available")]
    Truncated {
        /// Offset at which the read was attempted.
        offset: usize,
        /// Number of bytes required.
        needed: usize,
        /// Total number of bytes in the buffer.
        available: usize,
    },

    /// A text field could not be decoded with the requested encoding.
    #[error("Cannot decode {bytes:02x?} as {encoding}; did you specify the correct encoding?")]
    Text {
        /// Raw field bytes (after null truncation).
        bytes: Vec<u8>,
        /// Name of the encoding attempted.
        encoding: String,
    },

    /// The encoding label is not recognised.
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// A packed date does not name a valid calendar day.
    #[error("Invalid packed date: {0}")]
    InvalidDate(i64),

    /// A packed time does not name a valid clock time.
    #[error("Invalid packed time: {0}")]
    InvalidTime(i64),

    /// The frequency byte is not an ASCII character.
    #[error("Invalid frequency code: 0x{0:02x}")]
    InvalidFrequency(u8),
}

/// Errors that can occur while reading metastock files.
#[derive(Error, Debug)]
pub enum MetastockError {
    /// The price-series reader only supports 7 or 8 fields.
    #[error("Unsupported field count {0}, expected 7 or 8")]
    InvalidFieldCount(u8),

    /// Opening or reading a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Decoding a file's contents failed.
    #[error("Failed to decode {path}: {source}")]
    Decode {
        /// File being decoded.
        path: PathBuf,
        /// Underlying decode error.
        source: DecodeError,
    },

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),
}

/// Coarse classification of a [`MetastockError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller asked for something the decoder does not support.
    InvalidConfiguration,
    /// The file is missing or shorter than its header claims.
    Io,
    /// Bytes were present but could not be interpreted.
    Decode,
    /// Writing decoded output failed.
    Format,
}

impl MetastockError {
    /// Wraps an I/O error with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wraps a decode error with the path that produced it.
    pub fn decode(path: impl Into<PathBuf>, source: DecodeError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Classifies the error.
    ///
    /// A truncated buffer is an I/O failure: the file ended before the
    /// header-declared records did.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFieldCount(_) => ErrorKind::InvalidConfiguration,
            Self::Io { .. }
            | Self::Decode {
                source: DecodeError::Truncated { .. },
                ..
            } => ErrorKind::Io,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Format(_) => ErrorKind::Format,
        }
    }
}
