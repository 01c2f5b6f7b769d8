//! Content digests for buffered output.
//!
//! - [`ContentHash`] - 32-byte digest with hex and HTTP entity-tag rendering
//! - [`ContentHasher`] - Incremental BLAKE3 hasher (requires `hash-blake3` feature)

mod digest;

#[cfg(feature = "hash-blake3")]
mod blake3;

pub use digest::ContentHash;

#[cfg(feature = "hash-blake3")]
pub use blake3::ContentHasher;
