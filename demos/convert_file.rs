//! Buffer a file through the passthrough converter and write it back out.
//!
//! Run with:
//!     cargo run --example convert_file -- <input> <output>

use std::fs::File;
use std::io::BufWriter;

use chunkbuf::{BufferConfig, ContentEncoding, Passthrough, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("usage: convert_file <input> <output>");
        std::process::exit(2);
    };

    let config = BufferConfig::new(64 * 1024).with_max_size_spec("256mb")?;
    let mut file = File::open(&input)?;

    let body = render(&Passthrough, &mut file, config, ContentEncoding::Identity)?;
    println!("{}: {} bytes buffered", input, body.content_length());

    let mut sink = BufWriter::new(File::create(&output)?);
    let written = body.write_to(&mut sink)?;
    println!("{}: {} bytes written", output, written);

    Ok(())
}
