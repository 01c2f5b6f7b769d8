//! Fixed-capacity writable chunk at the tail of a buffer.

use bytes::Bytes;

/// A chunk being filled. Its allocation is kept across [`Block::clear`].
#[derive(Debug)]
pub(crate) struct Block {
    data: Box<[u8]>,
    filled: usize,
}

impl Block {
    /// Allocates an empty block of `capacity` bytes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            filled: 0,
        }
    }

    /// Size of the backing storage.
    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of bytes written into this block.
    pub(crate) fn len(&self) -> usize {
        self.filled
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.filled
    }

    pub(crate) fn is_full(&self) -> bool {
        self.filled == self.data.len()
    }

    /// Appends one byte. The block must not be full.
    pub(crate) fn push(&mut self, byte: u8) {
        debug_assert!(!self.is_full());
        self.data[self.filled] = byte;
        self.filled += 1;
    }

    /// Copies as much of `src` as fits and returns the number of bytes taken.
    pub(crate) fn fill_from(&mut self, src: &[u8]) -> usize {
        let n = self.remaining().min(src.len());
        self.data[self.filled..self.filled + n].copy_from_slice(&src[..n]);
        self.filled += n;
        n
    }

    /// The written prefix.
    pub(crate) fn filled(&self) -> &[u8] {
        &self.data[..self.filled]
    }

    /// Forgets the written bytes, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        self.filled = 0;
    }

    /// Swaps a full block's storage for a fresh allocation and returns the
    /// old storage as an immutable chunk.
    pub(crate) fn take_full(&mut self) -> Bytes {
        debug_assert!(self.is_full());
        let fresh = vec![0u8; self.capacity()].into_boxed_slice();
        let full = std::mem::replace(&mut self.data, fresh);
        self.filled = 0;
        Bytes::from(full)
    }
}
