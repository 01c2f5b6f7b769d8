// Integration tests for the ChunkedBuffer public API
// Tests cover: write/drain semantics, chunk clamping, size bounds, reset, rendering

use chunkbuf::{
    BufferConfig, BufferError, ByteSink, ChunkedBuffer, ContentEncoding, MIN_CHUNK_SIZE,
    Passthrough, render,
};

fn pattern(n: usize) -> Vec<u8> {
    (0..n).map(|i| (i * 7 + 13) as u8).collect()
}

fn drain(buffer: &ChunkedBuffer) -> Vec<u8> {
    let mut out = Vec::new();
    buffer.write_to(&mut out).expect("draining into a Vec cannot fail");
    out
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

#[test]
fn test_empty_buffer_drains_nothing() {
    let buffer = ChunkedBuffer::new(MIN_CHUNK_SIZE);

    assert_eq!(buffer.len(), 0, "Fresh buffer should be empty");
    assert!(drain(&buffer).is_empty(), "Fresh buffer should emit no bytes");
}

#[test]
fn test_single_large_range() {
    let data = pattern(5000);
    let mut buffer = ChunkedBuffer::new(MIN_CHUNK_SIZE);

    buffer.write_range(&data, 0, data.len()).unwrap();

    assert_eq!(buffer.len(), 5000);
    assert_eq!(drain(&buffer), data, "Output must match input byte for byte");
}

#[test]
fn test_small_chunk_sizes_are_clamped() {
    for requested in [0, 1, 512, 2047] {
        let buffer = ChunkedBuffer::new(requested);
        assert_eq!(
            buffer.chunk_size(),
            MIN_CHUNK_SIZE,
            "chunk size {requested} should be clamped"
        );
    }
}

#[test]
fn test_mixed_byte_and_range_writes() {
    let data = pattern(9000);
    let mut buffer = ChunkedBuffer::new(MIN_CHUNK_SIZE);

    let mut offset = 0;
    let mut step = 1;
    while offset < data.len() {
        let len = step.min(data.len() - offset);
        if len == 1 {
            buffer.write_byte(data[offset]).unwrap();
        } else {
            buffer.write_range(&data, offset, len).unwrap();
        }
        offset += len;
        step = (step * 3) % 1031 + 1;
    }

    assert_eq!(buffer.len(), data.len());
    assert_eq!(drain(&buffer), data);
}

// ============================================================================
// Size Bounds
// ============================================================================

#[test]
fn test_bound_fires_on_rollover_after_limit() {
    let mut buffer = ChunkedBuffer::new(MIN_CHUNK_SIZE);
    buffer.set_max_size(Some("4096")).unwrap();

    buffer.write_range(&pattern(2048), 0, 2048).unwrap();
    assert_eq!(buffer.len(), 2048);

    buffer.write_range(&pattern(2048), 0, 2048).unwrap();
    assert_eq!(buffer.len(), 4096);

    let err = buffer.write_range(&[1], 0, 1).unwrap_err();
    match err {
        BufferError::SizeExceeded { length, max } => {
            assert_eq!(length, 4096);
            assert_eq!(max, 4096);
        }
        other => panic!("expected SizeExceeded, got {other}"),
    }
}

#[test]
fn test_unbounded_buffer_grows_freely() {
    let mut buffer = ChunkedBuffer::new(MIN_CHUNK_SIZE);
    buffer.set_max_size(None).unwrap();
    buffer.write_slice(&pattern(100_000)).unwrap();
    assert_eq!(buffer.len(), 100_000);
}

#[test]
fn test_size_spec_units() {
    let mut buffer = ChunkedBuffer::new(MIN_CHUNK_SIZE);

    buffer.set_max_size(Some("10k")).unwrap();
    assert_eq!(buffer.max_size(), Some(10240));

    buffer.set_max_size(Some("2MB")).unwrap();
    assert_eq!(buffer.max_size(), Some(2 * 1024 * 1024));

    buffer.set_max_size(Some("")).unwrap();
    assert_eq!(buffer.max_size(), None);

    let err = buffer.set_max_size(Some("lots")).unwrap_err();
    assert!(matches!(err, BufferError::InvalidSizeSpec { .. }));
}

// ============================================================================
// Invalid Ranges
// ============================================================================

#[test]
fn test_invalid_range_leaves_buffer_unchanged() {
    let mut buffer = ChunkedBuffer::new(MIN_CHUNK_SIZE);
    buffer.write_range(b"kept", 0, 4).unwrap();

    let source = pattern(10);
    assert!(buffer.write_range(&source, 8, 3).is_err());
    assert!(buffer.write_range(&source, 11, 1).is_err());
    assert!(buffer.write_range(&source, usize::MAX, 1).is_err());

    assert_eq!(buffer.len(), 4, "Failed writes must not change the length");
    assert_eq!(drain(&buffer), b"kept");
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_equivalent_to_fresh_buffer() {
    let second = pattern(6000);

    let mut reused = ChunkedBuffer::new(MIN_CHUNK_SIZE);
    reused.write_slice(&pattern(11_000)).unwrap();
    reused.reset();
    reused.write_slice(&second).unwrap();

    let mut fresh = ChunkedBuffer::new(MIN_CHUNK_SIZE);
    fresh.write_slice(&second).unwrap();

    assert_eq!(reused.len(), fresh.len());
    assert_eq!(drain(&reused), drain(&fresh));
}

// ============================================================================
// Producer Contract
// ============================================================================

#[test]
fn test_generic_producer() {
    fn produce<S: ByteSink + ?Sized>(sink: &mut S) -> Result<(), BufferError> {
        for &b in b"<doc>" {
            sink.write_byte(b)?;
        }
        sink.write_range(b"..body..", 2, 4)?;
        sink.write_all_bytes(b"</doc>")
    }

    let mut buffer = ChunkedBuffer::new(MIN_CHUNK_SIZE);
    produce(&mut buffer).unwrap();

    let mut reference = Vec::new();
    produce(&mut reference).unwrap();

    assert_eq!(drain(&buffer), reference);
    assert_eq!(reference, b"<doc>body</doc>");
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_sets_length_before_drain() {
    let document = pattern(40_000);
    let mut input: &[u8] = &document;

    let body = render(
        &Passthrough,
        &mut input,
        BufferConfig::new(4096),
        ContentEncoding::Identity,
    )
    .unwrap();

    assert_eq!(body.content_length(), document.len());
    let mut sent = Vec::new();
    body.write_to(&mut sent).unwrap();
    assert_eq!(sent, document);
}

#[test]
fn test_render_bounded_failure() {
    let config = BufferConfig::new(MIN_CHUNK_SIZE)
        .with_max_size_spec("8k")
        .unwrap();
    let mut input: &[u8] = &pattern(64 * 1024);

    let err = render(&Passthrough, &mut input, config, ContentEncoding::Identity).unwrap_err();
    assert!(err.is_fatal(), "Oversized document must fail fatally");
}
