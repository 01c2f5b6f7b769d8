//! Size bounds: a runaway document fails instead of exhausting memory.
//!
//! Run with:
//!     cargo run --example bounded_output

use chunkbuf::{BufferError, ChunkedBuffer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buffer = ChunkedBuffer::new(2048);
    buffer.set_max_size(Some("16k"))?;

    let line = b"<tr><td>row</td></tr>\n";
    let mut rows = 0;

    loop {
        match buffer.write_range(line, 0, line.len()) {
            Ok(()) => rows += 1,
            Err(BufferError::SizeExceeded { length, max }) => {
                println!("Stopped after {} rows: {} bytes buffered (max {})", rows, length, max);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    // The buffer is abandoned; a fresh request would reset or replace it.
    buffer.reset();
    println!("After reset: {} bytes", buffer.len());

    Ok(())
}
