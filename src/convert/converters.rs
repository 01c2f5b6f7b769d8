//! The converter seam and the built-in converters.

use std::io::{self, Read};

use crate::error::BufferError;
use crate::sink::ByteSink;

/// Size of the read block used by [`Passthrough`].
const COPY_BLOCK_SIZE: usize = 8192;

/// A conversion engine.
///
/// Implementations read a document from `input` and write the converted
/// markup to `output`, in whatever sizes suit them. Output errors (notably
/// [`BufferError::SizeExceeded`]) must be returned unchanged; engine failures
/// are reported as [`BufferError::Conversion`].
pub trait Converter {
    /// Converts `input` into `output`.
    fn convert(&self, input: &mut dyn Read, output: &mut dyn ByteSink) -> Result<(), BufferError>;
}

/// Copies the input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Converter for Passthrough {
    fn convert(&self, input: &mut dyn Read, output: &mut dyn ByteSink) -> Result<(), BufferError> {
        let mut block = [0u8; COPY_BLOCK_SIZE];
        loop {
            let n = match input.read(&mut block) {
                Ok(0) => return Ok(()),
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(BufferError::Io(e)),
            };
            output.write_range(&block, 0, n)?;
        }
    }
}

/// Ignores the input and answers `pong`, the service's liveness reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pong;

impl Converter for Pong {
    fn convert(&self, _input: &mut dyn Read, output: &mut dyn ByteSink) -> Result<(), BufferError> {
        for &b in b"pong" {
            output.write_byte(b)?;
        }
        Ok(())
    }
}

impl<F> Converter for F
where
    F: Fn(&mut dyn Read, &mut dyn ByteSink) -> Result<(), BufferError>,
{
    fn convert(&self, input: &mut dyn Read, output: &mut dyn ByteSink) -> Result<(), BufferError> {
        self(input, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ChunkedBuffer;

    #[test]
    fn test_passthrough_copies_large_input() {
        let data: Vec<u8> = (0..20_000).map(|i| (i % 97) as u8).collect();
        let mut buffer = ChunkedBuffer::new(2048);
        Passthrough.convert(&mut &data[..], &mut buffer).unwrap();
        assert_eq!(buffer.len(), data.len());
        assert_eq!(&buffer.to_bytes()[..], &data[..]);
    }

    #[test]
    fn test_passthrough_stops_on_size_exceeded() {
        let data = vec![b'x'; 10_000];
        let mut buffer = ChunkedBuffer::new(2048);
        buffer.set_max_bytes(Some(4096));
        let err = Passthrough.convert(&mut &data[..], &mut buffer).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_pong() {
        let mut out = Vec::new();
        Pong.convert(&mut io::empty(), &mut out).unwrap();
        assert_eq!(out, b"pong");
    }

    #[test]
    fn test_closure_converter() {
        let upper = |input: &mut dyn Read, output: &mut dyn ByteSink| -> Result<(), BufferError> {
            let mut text = Vec::new();
            input.read_to_end(&mut text)?;
            output.write_all_bytes(&text.to_ascii_uppercase())
        };
        let mut out = Vec::new();
        upper.convert(&mut &b"abc"[..], &mut out).unwrap();
        assert_eq!(out, b"ABC");
    }
}
