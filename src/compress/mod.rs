//! Gzip-compressed copies of a buffer.
//!
//! The compressed output is written into a second [`ChunkedBuffer`] with the
//! same chunk size and bound, so the compressed length is known before
//! draining too. Compression itself is done by `flate2`.
//!
//! This module requires the `gzip` feature to be enabled.

use std::io;

use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::debug;

use crate::buffer::ChunkedBuffer;
use crate::error::BufferError;

/// Compression level used by [`ChunkedBuffer::compress_default`].
pub const DEFAULT_GZIP_LEVEL: u32 = 6;

impl ChunkedBuffer {
    /// Returns a gzip-compressed copy of the content.
    ///
    /// `level` ranges from 0 (store) to 9 (best); larger values are capped
    /// by `flate2`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::SizeExceeded`] if the compressed output outgrows
    /// the bound, or [`BufferError::Io`] if the encoder fails.
    pub fn compress(&self, level: u32) -> Result<ChunkedBuffer, BufferError> {
        let mut target = ChunkedBuffer::new(self.chunk_size());
        target.set_max_bytes(self.max_size());

        let mut encoder = GzEncoder::new(&mut target, Compression::new(level));
        self.write_to(&mut encoder)
            .and_then(|_| encoder.finish().map_err(BufferError::from))
            .map_err(|err| match err {
                BufferError::Io(err) => unwrap_io(err),
                other => other,
            })?;

        debug!(
            original = self.len(),
            compressed = target.len(),
            level,
            "buffer compressed"
        );
        Ok(target)
    }

    /// Returns a gzip-compressed copy at [`DEFAULT_GZIP_LEVEL`].
    pub fn compress_default(&self) -> Result<ChunkedBuffer, BufferError> {
        self.compress(DEFAULT_GZIP_LEVEL)
    }
}

/// Recovers a [`BufferError`] that travelled through `std::io::Write`.
fn unwrap_io(err: io::Error) -> BufferError {
    if !err
        .get_ref()
        .is_some_and(|inner| inner.is::<BufferError>())
    {
        return BufferError::Io(err);
    }

    let kind = err.kind();
    match err.into_inner() {
        Some(inner) => match inner.downcast::<BufferError>() {
            Ok(buffer_err) => *buffer_err,
            Err(other) => BufferError::Io(io::Error::new(kind, other)),
        },
        None => BufferError::Io(io::Error::from(kind)),
    }
}
