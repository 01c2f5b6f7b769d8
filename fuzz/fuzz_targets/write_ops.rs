#![no_main]

use std::io::Read;

use chunkbuf::{BufferError, ChunkedBuffer, ContentHasher};
use flate2::read::GzDecoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    if data.len() < 4 {
        return;
    }

    // First bytes pick the chunk size and an optional bound
    let chunk_size = u16::from_le_bytes([data[0], data[1]]) as usize;
    let max = match data[2] {
        0 => None,
        n => Some(n as usize * 512),
    };
    let ops = &data[3..];

    let mut buffer = ChunkedBuffer::new(chunk_size);
    buffer.set_max_bytes(max);
    let mut reference = Vec::new();

    // Replay the input as a mix of byte and range writes
    let mut i = 0;
    while i < ops.len() {
        let op = ops[i];
        i += 1;
        let result = if op & 1 == 0 {
            let r = buffer.write_byte(op);
            if r.is_ok() {
                reference.push(op);
            }
            r
        } else {
            let len = (op as usize >> 1).min(ops.len() - i);
            let before = buffer.len();
            let r = buffer.write_range(ops, i, len);
            match &r {
                Ok(()) => reference.extend_from_slice(&ops[i..i + len]),
                Err(BufferError::SizeExceeded { .. }) => {
                    let written = buffer.len() - before;
                    reference.extend_from_slice(&ops[i..i + written]);
                }
                Err(e) => panic!("unexpected error: {e}"),
            }
            i += len;
            r
        };

        // Verify: length accounting holds after every operation
        assert_eq!(buffer.len(), reference.len());

        if let Err(e) = result {
            assert!(e.is_fatal());
            assert!(max.is_some_and(|max| buffer.len() >= max));
            break;
        }
    }

    // Verify: drained bytes match everything written, in order
    let mut out = Vec::new();
    buffer.write_to(&mut out).unwrap();
    assert_eq!(out, reference);

    // Verify: digest is independent of chunking
    assert_eq!(buffer.content_hash(), ContentHasher::hash(&reference));

    // Verify: unbounded compression round-trips
    buffer.set_max_bytes(None);
    let compressed = buffer.compress(1).unwrap();
    let mut decoded = Vec::new();
    GzDecoder::new(&compressed.to_bytes()[..])
        .read_to_end(&mut decoded)
        .unwrap();
    assert_eq!(decoded, reference);

    // Verify: reset returns to empty
    buffer.reset();
    assert_eq!(buffer.len(), 0);
});
