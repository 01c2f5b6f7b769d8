//! Rendering a conversion into a sendable body.

use std::io::{Read, Write};

use tracing::{debug, error};

use super::Converter;
use crate::buffer::ChunkedBuffer;
use crate::config::BufferConfig;
use crate::error::BufferError;

/// Encoding applied to a rendered body before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentEncoding {
    /// Sent as converted.
    #[default]
    Identity,
    /// Gzip-compressed (requires the `gzip` feature).
    #[cfg(feature = "gzip")]
    Gzip,
}

impl ContentEncoding {
    /// Value for a `Content-Encoding` header, `None` for identity.
    pub fn header_value(&self) -> Option<&'static str> {
        match self {
            ContentEncoding::Identity => None,
            #[cfg(feature = "gzip")]
            ContentEncoding::Gzip => Some("gzip"),
        }
    }
}

/// Converted output ready to be sent.
///
/// Holds the (possibly compressed) buffer so the transport can emit the
/// length and entity tag before streaming the bytes.
#[derive(Debug)]
pub struct RenderedBody {
    buffer: ChunkedBuffer,
    encoding: ContentEncoding,
}

impl RenderedBody {
    /// Number of bytes [`write_to`](Self::write_to) will emit.
    pub fn content_length(&self) -> usize {
        self.buffer.len()
    }

    /// The encoding of the stored bytes.
    pub fn content_encoding(&self) -> ContentEncoding {
        self.encoding
    }

    /// Strong entity tag of the stored bytes.
    #[cfg(feature = "hash-blake3")]
    pub fn etag(&self) -> String {
        self.buffer.content_hash().etag()
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &ChunkedBuffer {
        &self.buffer
    }

    /// Writes the body to `sink`, returning the number of bytes written.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<u64, BufferError> {
        self.buffer.write_to(sink)
    }

    /// Consumes the body and returns its buffer.
    pub fn into_buffer(self) -> ChunkedBuffer {
        self.buffer
    }
}

/// Converts `input` with `converter` into a new buffer built from `config`,
/// then applies `encoding`.
///
/// # Errors
///
/// Returns whatever the converter or the buffer reported. The partial output
/// is dropped; nothing is retried.
///
/// # Example
///
/// ```
/// use chunkbuf::{BufferConfig, BufferError, ContentEncoding, Passthrough, render};
///
/// let config = BufferConfig::new(2048).with_max_size_spec("4k")?;
/// let mut input: &[u8] = &[b'x'; 10_000];
///
/// let err = render(&Passthrough, &mut input, config, ContentEncoding::Identity).unwrap_err();
/// assert!(matches!(err, BufferError::SizeExceeded { .. }));
/// # Ok::<(), BufferError>(())
/// ```
pub fn render<C: Converter + ?Sized>(
    converter: &C,
    input: &mut dyn Read,
    config: BufferConfig,
    encoding: ContentEncoding,
) -> Result<RenderedBody, BufferError> {
    let mut buffer = ChunkedBuffer::with_config(config);

    if let Err(err) = converter.convert(input, &mut buffer) {
        error!(error = %err, written = buffer.len(), "conversion failed");
        return Err(err);
    }
    debug!(bytes = buffer.len(), "conversion finished");

    let buffer = match encoding {
        ContentEncoding::Identity => buffer,
        #[cfg(feature = "gzip")]
        ContentEncoding::Gzip => buffer.compress_default().inspect_err(|err| {
            error!(error = %err, "compression failed");
        })?,
    };

    Ok(RenderedBody { buffer, encoding })
}
