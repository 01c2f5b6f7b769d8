//! Core output buffer - [`ChunkedBuffer`].
//!
//! Converted output is accumulated in fixed-size chunks instead of one
//! growing array, so writing never copies earlier output and the total
//! length is known before the first byte is sent:
//!
//! - `write_byte()` / `write_range()` - Append output in any size
//! - `len()` - Total size, e.g. for a `Content-Length` header
//! - `write_to()` - Drain everything, in order, to a sink
//!
//! # Example
//!
//! ```
//! use chunkbuf::ChunkedBuffer;
//!
//! let mut buffer = ChunkedBuffer::new(4096);
//! buffer.set_max_size(Some("1m"))?;
//!
//! buffer.write_byte(b'<')?;
//! buffer.write_range(b"<p>hello</p>", 1, 11)?;
//! assert_eq!(buffer.len(), 12);
//!
//! let mut out = Vec::new();
//! buffer.write_to(&mut out)?;
//! assert_eq!(out, b"<p>hello</p>");
//! # Ok::<(), chunkbuf::BufferError>(())
//! ```

use std::io::{self, Write};
use std::iter;

use bytes::{Bytes, BytesMut};
use tracing::{debug, trace, warn};

use super::block::Block;
use crate::config::{BufferConfig, effective_chunk_size, parse_size_spec};
use crate::error::BufferError;

/// An append-only byte buffer stored as a list of fixed-size chunks.
///
/// Every completed chunk is exactly `chunk_size()` bytes long and never
/// changes again; only the last chunk is written to. When the last chunk is
/// full and more bytes arrive, it is moved into the completed list and a new
/// one is allocated (a *rollover*).
///
/// # Size bound
///
/// An optional maximum size is enforced at rollover time only, and never on
/// the first rollover. The check is `len() >= max_size`, so the buffer may
/// end up holding up to `chunk_size() - 1` bytes more than the bound before
/// the next rollover fails with [`BufferError::SizeExceeded`]. In effect the
/// bound caps the number of completed chunks. After that error the buffer
/// must be abandoned.
///
/// # Ownership
///
/// A buffer belongs to one request. Writes take `&mut self`, draining takes
/// `&self` and can be repeated.
///
/// # Example
///
/// ```
/// use chunkbuf::{BufferError, ChunkedBuffer};
///
/// let mut buffer = ChunkedBuffer::new(2048);
/// buffer.set_max_bytes(Some(4096));
///
/// buffer.write_range(&[0u8; 4096], 0, 4096)?;
/// assert_eq!(buffer.len(), 4096);
///
/// let err = buffer.write_byte(0).unwrap_err();
/// assert!(matches!(err, BufferError::SizeExceeded { length: 4096, max: 4096 }));
/// # Ok::<(), BufferError>(())
/// ```
#[derive(Debug)]
pub struct ChunkedBuffer {
    completed: Vec<Bytes>,
    current: Block,
    chunk_size: usize,
    max_size: Option<usize>,
}

impl ChunkedBuffer {
    /// Creates an empty, unbounded buffer.
    ///
    /// `chunk_size` is clamped to [`MIN_CHUNK_SIZE`](crate::MIN_CHUNK_SIZE).
    pub fn new(chunk_size: usize) -> Self {
        let chunk_size = effective_chunk_size(chunk_size);
        Self {
            completed: Vec::new(),
            current: Block::with_capacity(chunk_size),
            chunk_size,
            max_size: None,
        }
    }

    /// Creates an empty buffer from a configuration.
    pub fn with_config(config: BufferConfig) -> Self {
        let mut buffer = Self::new(config.chunk_size());
        buffer.max_size = config.max_size();
        buffer
    }

    /// Sets the maximum size from a size specification.
    ///
    /// `None` and `Some("")` remove the bound. Otherwise the spec is an
    /// integer with an optional `k`/`kb`/`m`/`mb` suffix, see
    /// [`parse_size_spec`](crate::parse_size_spec). Intended to be called
    /// once, before writing; a later call only affects future rollovers.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidSizeSpec`] and leaves the current bound
    /// untouched if the spec is malformed.
    pub fn set_max_size(&mut self, spec: Option<&str>) -> Result<(), BufferError> {
        self.max_size = parse_size_spec(spec)?;
        Ok(())
    }

    /// Sets the maximum size in bytes (`None` for unbounded).
    pub fn set_max_bytes(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
    }

    /// Returns the configured bound, if any.
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Returns the effective chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the number of completed (full) chunks.
    pub fn chunk_count(&self) -> usize {
        self.completed.len()
    }

    /// Returns the total number of bytes written.
    pub fn len(&self) -> usize {
        self.completed.len() * self.chunk_size + self.current.len()
    }

    /// Returns true if nothing has been written since creation or the last reset.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::SizeExceeded`] if a rollover is needed and the
    /// bound has been reached.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), BufferError> {
        if self.current.is_full() {
            self.roll_over()?;
        }
        self.current.push(byte);
        Ok(())
    }

    /// Appends `len` bytes of `bytes` starting at `offset`.
    ///
    /// A zero `len` succeeds without looking at `offset`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidRange`] if `offset + len` is beyond `bytes`;
    ///   nothing is written in that case.
    /// - [`BufferError::SizeExceeded`] if a rollover is needed and the bound
    ///   has been reached. Bytes before the failing rollover stay written.
    pub fn write_range(&mut self, bytes: &[u8], offset: usize, len: usize) -> Result<(), BufferError> {
        if len == 0 {
            return Ok(());
        }

        let end = offset
            .checked_add(len)
            .filter(|&end| end <= bytes.len())
            .ok_or(BufferError::InvalidRange {
                offset,
                len,
                available: bytes.len(),
            })?;

        self.write_slice(&bytes[offset..end])
    }

    /// Appends a whole slice.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::SizeExceeded`] if a rollover is needed and the
    /// bound has been reached.
    pub fn write_slice(&mut self, mut src: &[u8]) -> Result<(), BufferError> {
        while !src.is_empty() {
            if self.current.is_full() {
                self.roll_over()?;
            }
            let n = self.current.fill_from(src);
            src = &src[n..];
        }
        Ok(())
    }

    /// Moves the full current chunk into the completed list.
    ///
    /// The bound is not checked on the first rollover.
    fn roll_over(&mut self) -> Result<(), BufferError> {
        if !self.completed.is_empty() {
            if let Some(max) = self.max_size {
                let length = self.len();
                if length >= max {
                    warn!(length, max, "max buffer size exceeded");
                    return Err(BufferError::SizeExceeded { length, max });
                }
            }
        }

        self.completed.push(self.current.take_full());
        trace!(completed = self.completed.len(), "chunk rollover");
        Ok(())
    }

    /// Empties the buffer for reuse.
    ///
    /// Completed chunks are dropped; the current chunk's allocation, the
    /// chunk size and the bound are kept.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.current.clear();
    }

    /// Iterates over the stored bytes in write order, one slice per chunk.
    ///
    /// The partially filled last chunk is included only if it holds data.
    pub fn segments(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let tail = self.current.filled();
        self.completed
            .iter()
            .map(|chunk| chunk.as_ref())
            .chain(iter::once(tail).filter(|tail| !tail.is_empty()))
    }

    /// Returns the segments as `Bytes` handles.
    ///
    /// Completed chunks are shared, not copied; the filled part of the current
    /// chunk is copied.
    pub fn chunks_bytes(&self) -> Vec<Bytes> {
        let mut chunks = self.completed.clone();
        if self.current.len() > 0 {
            chunks.push(Bytes::copy_from_slice(self.current.filled()));
        }
        chunks
    }

    /// Copies the whole content into one contiguous `Bytes`.
    pub fn to_bytes(&self) -> Bytes {
        let mut out = BytesMut::with_capacity(self.len());
        for segment in self.segments() {
            out.extend_from_slice(segment);
        }
        out.freeze()
    }

    /// Writes the content to `sink` and returns the number of bytes written.
    ///
    /// The buffer is not modified, so this can be repeated.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Io`] if the sink fails.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<u64, BufferError> {
        for segment in self.segments() {
            sink.write_all(segment)?;
        }
        let written = self.len() as u64;
        debug!(bytes = written, "buffer drained");
        Ok(written)
    }

    /// Computes the BLAKE3 digest of the content.
    #[cfg(feature = "hash-blake3")]
    pub fn content_hash(&self) -> crate::hash::ContentHash {
        crate::hash::ContentHasher::digest_segments(self.segments())
    }
}

impl Default for ChunkedBuffer {
    fn default() -> Self {
        Self::with_config(BufferConfig::default())
    }
}

impl Write for ChunkedBuffer {
    /// Accepts as much of `buf` as fits before a failing rollover.
    ///
    /// A bound hit after some bytes were copied yields a short write; the
    /// error surfaces on the next call, which then writes nothing.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut copied = 0;
        while copied < buf.len() {
            if self.current.is_full() {
                if let Err(err) = self.roll_over() {
                    if copied == 0 {
                        return Err(err.into());
                    }
                    break;
                }
            }
            copied += self.current.fill_from(&buf[copied..]);
        }
        Ok(copied)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
