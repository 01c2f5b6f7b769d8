//! Basic conversion example: converter in, length and bytes out.
//!
//! Run with:
//!     cargo run --example convert_basic

use std::io::Read;

use chunkbuf::{BufferConfig, BufferError, ByteSink, ContentEncoding, render};

/// Wraps each input line in a paragraph tag, writing byte by byte like a
/// streaming serializer would.
fn paragraphs(input: &mut dyn Read, output: &mut dyn ByteSink) -> Result<(), BufferError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    output.write_all_bytes(b"<html><body>\n")?;
    for line in text.lines() {
        output.write_all_bytes(b"<p>")?;
        for b in line.bytes() {
            output.write_byte(b)?;
        }
        output.write_all_bytes(b"</p>\n")?;
    }
    output.write_all_bytes(b"</body></html>\n")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let document = "first line\nsecond line\n".repeat(2000);

    let body = render(
        &paragraphs,
        &mut document.as_bytes(),
        BufferConfig::default(),
        ContentEncoding::Identity,
    )?;

    println!("Content-Length: {}", body.content_length());
    println!("ETag: {}", body.etag());
    println!(
        "Stored in {} full chunks of {} bytes\n",
        body.buffer().chunk_count(),
        body.buffer().chunk_size()
    );

    let mut response = Vec::with_capacity(body.content_length());
    body.write_to(&mut response)?;
    println!("{}", String::from_utf8_lossy(&response[..80]));

    Ok(())
}
