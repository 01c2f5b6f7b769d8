//! Async draining with tokio: several requests, each with its own buffer.
//!
//! Run with:
//!     cargo run --example async_drain --features async-io

use chunkbuf::{BufferConfig, ChunkedBuffer};
use tokio_util::compat::TokioAsyncWriteCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let documents: Vec<Vec<u8>> = vec![
        (0..50_000).map(|i| (i % 256) as u8).collect(),
        (0..120_000).map(|i| (i % 251) as u8).collect(),
        b"<p>short</p>".to_vec(),
    ];

    println!("Converting {} documents concurrently...\n", documents.len());

    let handles: Vec<_> = documents
        .into_iter()
        .enumerate()
        .map(|(id, document)| tokio::spawn(serve(id, document)))
        .collect();

    for handle in handles {
        let (id, length, sent) = handle.await??;
        println!("Request {}: Content-Length {}, {} bytes sent", id, length, sent);
    }

    Ok(())
}

async fn serve(
    id: usize,
    document: Vec<u8>,
) -> Result<(usize, usize, u64), chunkbuf::BufferError> {
    let mut buffer = ChunkedBuffer::with_config(BufferConfig::new(8 * 1024));
    buffer.write_slice(&document)?;
    let length = buffer.len();

    // Any tokio writer works through the compat layer
    let mut socket = Vec::new();
    let sent = buffer.drain_async((&mut socket).compat_write()).await?;
    assert_eq!(socket.len(), length);

    Ok((id, length, sent))
}
