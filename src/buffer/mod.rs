//! Chunked output buffer.
//!
//! - [`ChunkedBuffer`] - Append-only, optionally bounded byte accumulator
//!
//! The writable tail chunk lives in `block`, an implementation detail.

mod block;
mod chunked;

pub use chunked::ChunkedBuffer;
