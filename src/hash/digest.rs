//! Content digest type.

use std::fmt;

/// A 32-byte digest of a buffer's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// The size of the digest in bytes.
    pub const SIZE: usize = 32;

    /// Number of digest bytes used in an entity tag (128 bits).
    const ETAG_BYTES: usize = 16;

    /// Wraps raw digest bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex(&self.0)
    }

    /// Parses a 64-character hex string.
    ///
    /// Returns `None` if the string has the wrong length or is not hex.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() != Self::SIZE * 2 || !hex_str.is_ascii() {
            return None;
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex_str[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }

    /// Strong HTTP entity tag: the first 128 bits in hex, quoted.
    ///
    /// ```
    /// use chunkbuf::ContentHash;
    ///
    /// let etag = ContentHash::new([0xab; 32]).etag();
    /// assert_eq!(etag, format!("\"{}\"", "ab".repeat(16)));
    /// ```
    pub fn etag(&self) -> String {
        format!("\"{}\"", hex(&self.0[..Self::ETAG_BYTES]))
    }

    /// Weak HTTP entity tag (`W/"..."`).
    pub fn weak_etag(&self) -> String {
        format!("W/{}", self.etag())
    }
}

fn hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0xf) as usize] as char);
    }
    out
}

impl AsRef<[u8]> for ContentHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
        let hash = ContentHash::new(bytes);

        let hex = hash.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("0123456789abcdef"));
        assert_eq!(hash.to_string(), hex);
        assert_eq!(ContentHash::from_hex(&hex), Some(hash));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(ContentHash::from_hex("abc").is_none());
        assert!(ContentHash::from_hex(&"zz".repeat(32)).is_none());
    }

    #[test]
    fn test_etag_format() {
        let hash = ContentHash::new([0x5a; 32]);
        let etag = hash.etag();
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(etag.len(), 34);
        assert_eq!(hash.weak_etag(), format!("W/{}", etag));
    }
}
