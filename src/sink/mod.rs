//! Producer-side byte sink.
//!
//! [`ByteSink`] is the capability a conversion engine writes its output
//! through: one byte at a time or a range of a larger slice. It is
//! implemented by [`ChunkedBuffer`] (bounded, chunked) and by `Vec<u8>`
//! (unbounded, contiguous).

use crate::buffer::ChunkedBuffer;
use crate::error::BufferError;

/// A destination for converted output.
pub trait ByteSink {
    /// Appends a single byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), BufferError>;

    /// Appends `len` bytes of `bytes` starting at `offset`.
    ///
    /// A zero `len` is a successful no-op. Implementations must reject
    /// ranges outside `bytes` with [`BufferError::InvalidRange`] without
    /// writing anything.
    fn write_range(&mut self, bytes: &[u8], offset: usize, len: usize) -> Result<(), BufferError>;

    /// Appends a whole slice.
    fn write_all_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.write_range(bytes, 0, bytes.len())
    }
}

impl ByteSink for ChunkedBuffer {
    fn write_byte(&mut self, byte: u8) -> Result<(), BufferError> {
        ChunkedBuffer::write_byte(self, byte)
    }

    fn write_range(&mut self, bytes: &[u8], offset: usize, len: usize) -> Result<(), BufferError> {
        ChunkedBuffer::write_range(self, bytes, offset, len)
    }

    fn write_all_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.write_slice(bytes)
    }
}

impl ByteSink for Vec<u8> {
    fn write_byte(&mut self, byte: u8) -> Result<(), BufferError> {
        self.push(byte);
        Ok(())
    }

    fn write_range(&mut self, bytes: &[u8], offset: usize, len: usize) -> Result<(), BufferError> {
        if len == 0 {
            return Ok(());
        }
        let range = checked_range(bytes, offset, len)?;
        self.extend_from_slice(&bytes[range]);
        Ok(())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_byte(&mut self, byte: u8) -> Result<(), BufferError> {
        (**self).write_byte(byte)
    }

    fn write_range(&mut self, bytes: &[u8], offset: usize, len: usize) -> Result<(), BufferError> {
        (**self).write_range(bytes, offset, len)
    }

    fn write_all_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        (**self).write_all_bytes(bytes)
    }
}

fn checked_range(bytes: &[u8], offset: usize, len: usize) -> Result<std::ops::Range<usize>, BufferError> {
    match offset.checked_add(len) {
        Some(end) if end <= bytes.len() => Ok(offset..end),
        _ => Err(BufferError::InvalidRange {
            offset,
            len,
            available: bytes.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_markup<S: ByteSink>(mut sink: S) -> Result<(), BufferError> {
        sink.write_byte(b'<')?;
        sink.write_range(b"xxp>yy", 2, 2)?;
        sink.write_all_bytes(b"text")?;
        sink.write_range(b"</p>", 0, 4)
    }

    #[test]
    fn test_vec_sink() {
        let mut out = Vec::new();
        emit_markup(&mut out).unwrap();
        assert_eq!(out, b"<p>text</p>");
    }

    #[test]
    fn test_chunked_buffer_sink() {
        let mut buffer = ChunkedBuffer::new(2048);
        emit_markup(&mut buffer).unwrap();
        assert_eq!(buffer.len(), 11);
        assert_eq!(&buffer.to_bytes()[..], b"<p>text</p>");
    }

    #[test]
    fn test_dyn_sink() {
        let mut buffer = ChunkedBuffer::new(2048);
        let sink: &mut dyn ByteSink = &mut buffer;
        sink.write_all_bytes(b"dyn").unwrap();
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_vec_rejects_bad_range() {
        let mut out = Vec::new();
        let err = out.write_range(b"abc", 2, 2).unwrap_err();
        assert!(matches!(err, BufferError::InvalidRange { .. }));
        assert!(out.is_empty());
        out.write_range(b"abc", 10, 0).unwrap();
    }
}
