//! Async draining support.
//!
//! This module drains a buffer into a `futures-io::AsyncWrite`, making it
//! runtime-agnostic and usable with tokio, async-std, smol, and other async
//! runtimes.
//!
//! - [`Drain`] - Future returned by [`ChunkedBuffer::drain_async`](crate::ChunkedBuffer::drain_async)
//!
//! This module requires the `async-io` feature to be enabled.

mod drain;

pub use drain::Drain;
