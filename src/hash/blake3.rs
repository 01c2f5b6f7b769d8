//! BLAKE3 digests of buffered output.

use super::ContentHash;

/// Incremental BLAKE3 hasher fed one buffer segment at a time.
#[derive(Debug, Clone, Default)]
pub struct ContentHasher {
    state: blake3::Hasher,
}

impl ContentHasher {
    /// Creates an empty hasher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next segment of output.
    pub fn update(&mut self, segment: &[u8]) -> &mut Self {
        self.state.update(segment);
        self
    }

    /// Returns the digest of the segments fed so far.
    pub fn finalize(&self) -> ContentHash {
        ContentHash::new(self.state.finalize().into())
    }

    /// Digests a sequence of segments as one contiguous document.
    pub fn digest_segments<'a, I>(segments: I) -> ContentHash
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut hasher = Self::new();
        for segment in segments {
            hasher.update(segment);
        }
        hasher.finalize()
    }

    /// Digests a contiguous document.
    pub fn hash(document: &[u8]) -> ContentHash {
        ContentHash::new(blake3::hash(document).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &[u8] = b"<html><head><title>report</title></head><body><p>q3</p></body></html>";

    #[test]
    fn test_segment_boundaries_do_not_change_digest() {
        let whole = ContentHasher::hash(PAGE);
        for cut in [0, 1, 6, PAGE.len() / 2, PAGE.len()] {
            let (head, tail) = PAGE.split_at(cut);
            assert_eq!(
                ContentHasher::digest_segments([head, tail]),
                whole,
                "split at {cut} changed the digest"
            );
        }
    }

    #[test]
    fn test_update_chains() {
        let mut hasher = ContentHasher::new();
        hasher.update(b"<p>").update(b"pong").update(b"</p>");
        assert_eq!(hasher.finalize(), ContentHasher::hash(b"<p>pong</p>"));
    }

    #[test]
    fn test_empty_document_has_stable_etag() {
        let empty = ContentHasher::digest_segments(std::iter::empty());
        assert_eq!(empty, ContentHasher::hash(b""));
        assert_eq!(empty.etag(), ContentHasher::new().finalize().etag());
        assert_ne!(empty.etag(), ContentHasher::hash(PAGE).etag());
    }
}
