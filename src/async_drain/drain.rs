//! Async drain future.
//!
//! # Example
//!
//! ```ignore
//! use chunkbuf::ChunkedBuffer;
//! use tokio_util::compat::TokioAsyncWriteCompatExt;
//!
//! async fn send(buffer: &ChunkedBuffer) -> Result<u64, chunkbuf::BufferError> {
//!     let file = tokio::fs::File::create("out.html").await?;
//!     buffer.drain_async(file.compat_write()).await
//! }
//! ```

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_io::AsyncWrite;
use pin_project_lite::pin_project;
use tracing::debug;

use crate::buffer::ChunkedBuffer;
use crate::error::BufferError;

pin_project! {
    /// A future that writes a buffer's segments to an async writer.
    ///
    /// The segments are captured when the future is created (completed chunks
    /// are shared, the partial tail is copied), so the buffer itself is not
    /// borrowed while the write is in flight. The writer is flushed once all
    /// bytes are written. Resolves to the number of bytes written.
    #[must_use = "futures do nothing unless polled"]
    pub struct Drain<W> {
        #[pin]
        writer: W,
        segments: Vec<Bytes>,
        index: usize,
        pos: usize,
        written: u64,
    }
}

impl<W: AsyncWrite> Drain<W> {
    /// Creates a drain of `buffer`'s current content into `writer`.
    pub fn new(buffer: &ChunkedBuffer, writer: W) -> Self {
        Self {
            writer,
            segments: buffer.chunks_bytes(),
            index: 0,
            pos: 0,
            written: 0,
        }
    }
}

impl<W: AsyncWrite> Future for Drain<W> {
    type Output = Result<u64, BufferError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        while *this.index < this.segments.len() {
            let segment = &this.segments[*this.index];
            if *this.pos == segment.len() {
                *this.index += 1;
                *this.pos = 0;
                continue;
            }

            match this.writer.as_mut().poll_write(cx, &segment[*this.pos..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => return Poll::Ready(Err(BufferError::Io(e))),
                Poll::Ready(Ok(0)) => {
                    return Poll::Ready(Err(BufferError::Io(io::Error::from(
                        io::ErrorKind::WriteZero,
                    ))));
                }
                Poll::Ready(Ok(n)) => {
                    *this.pos += n;
                    *this.written += n as u64;
                }
            }
        }

        match this.writer.as_mut().poll_flush(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Err(e)) => Poll::Ready(Err(BufferError::Io(e))),
            Poll::Ready(Ok(())) => {
                debug!(bytes = *this.written, "buffer drained (async)");
                Poll::Ready(Ok(*this.written))
            }
        }
    }
}

impl ChunkedBuffer {
    /// Drains the content into an async writer.
    ///
    /// Uses `futures_io::AsyncWrite`; tokio users can adapt their writers with
    /// `tokio_util::compat`. Pass `&mut writer` to keep using the writer
    /// afterwards.
    ///
    /// # Errors
    ///
    /// The returned future fails with [`BufferError::Io`] if the writer fails
    /// or stops accepting bytes.
    pub fn drain_async<W: AsyncWrite>(&self, writer: W) -> Drain<W> {
        Drain::new(self, writer)
    }
}
