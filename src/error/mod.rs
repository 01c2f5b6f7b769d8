//! Error types for chunkbuf.

use std::fmt;
use std::io;

/// Errors that can occur while configuring, filling or draining a buffer.
#[derive(Debug)]
pub enum BufferError {
    /// An I/O error occurred while writing to a sink.
    Io(io::Error),

    /// A maximum-size specification could not be parsed.
    InvalidSizeSpec {
        /// The specification as given by the caller.
        spec: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A range write referred to bytes outside the source slice.
    InvalidRange {
        /// Requested start offset.
        offset: usize,
        /// Requested number of bytes.
        len: usize,
        /// Length of the source slice.
        available: usize,
    },

    /// The buffer reached its configured bound while rolling over to a new chunk.
    ///
    /// This is fatal: the buffer must be abandoned.
    SizeExceeded {
        /// Bytes held by the buffer when the bound fired.
        length: usize,
        /// The configured bound.
        max: usize,
    },

    /// The conversion engine failed to produce output.
    Conversion {
        /// Description supplied by the converter.
        message: String,
    },
}

impl BufferError {
    /// Creates a conversion error from any displayable message.
    pub fn conversion(message: impl Into<String>) -> Self {
        BufferError::Conversion {
            message: message.into(),
        }
    }

    /// Returns true if the buffer that produced this error can no longer be used.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BufferError::SizeExceeded { .. })
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::Io(e) => write!(f, "io error: {}", e),
            BufferError::InvalidSizeSpec { spec, reason } => {
                write!(f, "invalid size spec {:?}: {}", spec, reason)
            }
            BufferError::InvalidRange {
                offset,
                len,
                available,
            } => write!(
                f,
                "range out of bounds: offset {} + len {} exceeds {} bytes",
                offset, len, available
            ),
            BufferError::SizeExceeded { length, max } => {
                write!(f, "max buffer size exceeded: {} bytes (max {})", length, max)
            }
            BufferError::Conversion { message } => write!(f, "conversion failed: {}", message),
        }
    }
}

impl std::error::Error for BufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BufferError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BufferError {
    fn from(e: io::Error) -> Self {
        BufferError::Io(e)
    }
}

impl From<BufferError> for io::Error {
    fn from(e: BufferError) -> Self {
        match e {
            BufferError::Io(e) => e,
            BufferError::InvalidRange { .. } | BufferError::InvalidSizeSpec { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, e)
            }
            BufferError::SizeExceeded { .. } => io::Error::new(io::ErrorKind::OutOfMemory, e),
            BufferError::Conversion { .. } => io::Error::other(e),
        }
    }
}
