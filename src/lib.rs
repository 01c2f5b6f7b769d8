//! chunkbuf
//!
//! Chunked, size-bounded output buffering for document conversion services.
//!
//! A conversion engine writes its output incrementally, byte by byte and in
//! bursts, while the transport needs the total response size before it sends
//! the first byte. `chunkbuf` sits between the two:
//!
//! - the converter writes into a [`ChunkedBuffer`] through [`ByteSink`] or
//!   [`std::io::Write`]
//! - the buffer grows in fixed-size chunks, never copying earlier output
//! - an optional maximum size stops a single document from exhausting memory
//! - the transport reads [`ChunkedBuffer::len`], then drains the chunks in order
//!
//! The crate intentionally:
//! - does NOT parse or detect document formats
//! - does NOT transcode character sets
//! - does NOT speak HTTP
//! - does NOT share buffers between requests
//!
//! # Sync
//!
//! ```
//! use chunkbuf::{ChunkedBuffer, BufferError};
//!
//! fn main() -> Result<(), BufferError> {
//!     let mut buffer = ChunkedBuffer::new(16 * 1024);
//!     buffer.set_max_size(Some("10m"))?;
//!
//!     buffer.write_range(b"<html><body>converted</body></html>", 0, 35)?;
//!
//!     let length = buffer.len();
//!     let mut response = Vec::with_capacity(length);
//!     buffer.write_to(&mut response)?;
//!     assert_eq!(response.len(), length);
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use chunkbuf::ChunkedBuffer;
//! use futures_io::AsyncWrite;
//!
//! async fn send<W: AsyncWrite + Unpin>(buffer: &ChunkedBuffer, socket: W) -> Result<(), chunkbuf::BufferError> {
//!     let written = buffer.drain_async(socket).await?;
//!     println!("sent {} bytes", written);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod convert;
mod error;
mod sink;

#[cfg(feature = "hash")]
mod hash;

#[cfg(feature = "gzip")]
mod compress;

#[cfg(feature = "async-io")]
mod async_drain;

//
// Public surface
//

pub use buffer::ChunkedBuffer;
pub use config::{
    BufferConfig, DEFAULT_CHUNK_SIZE, MIN_CHUNK_SIZE, effective_chunk_size, parse_size_spec,
};
pub use convert::{ContentEncoding, Converter, Passthrough, Pong, RenderedBody, render};
pub use error::BufferError;
pub use sink::ByteSink;

#[cfg(feature = "hash")]
pub use hash::ContentHash;

#[cfg(feature = "hash-blake3")]
pub use hash::ContentHasher;

#[cfg(feature = "gzip")]
pub use compress::DEFAULT_GZIP_LEVEL;

#[cfg(feature = "async-io")]
pub use async_drain::Drain;
