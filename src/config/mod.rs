//! Configuration for buffer sizing.
//!
//! - [`BufferConfig`] - Chunk size and optional maximum size of a buffer
//! - [`parse_size_spec`] - Parser for human-readable size limits such as `"10k"` or `"2MB"`
//!
//! # Example
//!
//! ```
//! use chunkbuf::BufferConfig;
//!
//! let config = BufferConfig::new(64 * 1024).with_max_size_spec("8mb")?;
//! assert_eq!(config.chunk_size(), 64 * 1024);
//! assert_eq!(config.max_size(), Some(8 * 1024 * 1024));
//! # Ok::<(), chunkbuf::BufferError>(())
//! ```

use crate::error::BufferError;

/// Smallest chunk size a buffer will use. Smaller requests are clamped up.
pub const MIN_CHUNK_SIZE: usize = 2048;

/// Chunk size used by [`BufferConfig::default`] (16 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;

const KIB: usize = 1024;
const MIB: usize = 1024 * 1024;

/// Returns the chunk size a buffer actually uses for a requested size.
pub const fn effective_chunk_size(requested: usize) -> usize {
    if requested < MIN_CHUNK_SIZE {
        MIN_CHUNK_SIZE
    } else {
        requested
    }
}

/// Parses a maximum-size specification.
///
/// `None` and `""` mean unbounded and yield `Ok(None)`. Anything else must be a
/// decimal integer optionally followed by a case-insensitive unit: `k`/`kb`
/// (x1024) or `m`/`mb` (x1024²).
///
/// # Errors
///
/// Returns [`BufferError::InvalidSizeSpec`] if the numeric portion is not a
/// non-negative integer, or if the resulting byte count does not fit in `usize`.
///
/// # Example
///
/// ```
/// use chunkbuf::parse_size_spec;
///
/// assert_eq!(parse_size_spec(Some("10k"))?, Some(10 * 1024));
/// assert_eq!(parse_size_spec(Some("3MB"))?, Some(3 * 1024 * 1024));
/// assert_eq!(parse_size_spec(Some("512"))?, Some(512));
/// assert_eq!(parse_size_spec(Some(""))?, None);
/// assert_eq!(parse_size_spec(None)?, None);
/// assert!(parse_size_spec(Some("1.5m")).is_err());
/// # Ok::<(), chunkbuf::BufferError>(())
/// ```
pub fn parse_size_spec(spec: Option<&str>) -> Result<Option<usize>, BufferError> {
    let spec = match spec {
        None | Some("") => return Ok(None),
        Some(spec) => spec,
    };

    let lower = spec.to_ascii_lowercase();
    let (digits, multiplier) = if let Some(digits) = lower.strip_suffix("kb") {
        (digits, KIB)
    } else if let Some(digits) = lower.strip_suffix("mb") {
        (digits, MIB)
    } else if let Some(digits) = lower.strip_suffix('k') {
        (digits, KIB)
    } else if let Some(digits) = lower.strip_suffix('m') {
        (digits, MIB)
    } else {
        (lower.as_str(), 1)
    };

    let invalid = |reason| BufferError::InvalidSizeSpec {
        spec: spec.to_owned(),
        reason,
    };

    if digits.starts_with('-') {
        return Err(invalid("negative sizes are not allowed"));
    }

    let value: usize = digits
        .parse()
        .map_err(|_| invalid("numeric portion is not a valid integer"))?;

    value
        .checked_mul(multiplier)
        .map(Some)
        .ok_or_else(|| invalid("size does not fit in usize"))
}

/// Sizing configuration for a [`ChunkedBuffer`](crate::ChunkedBuffer).
///
/// - `chunk_size` - Capacity of each storage chunk, never below [`MIN_CHUNK_SIZE`]
/// - `max_size` - Optional bound, checked whenever the buffer rolls over to a new chunk
///
/// # Example
///
/// ```
/// use chunkbuf::{BufferConfig, MIN_CHUNK_SIZE};
///
/// let config = BufferConfig::new(100);
/// assert_eq!(config.chunk_size(), MIN_CHUNK_SIZE);
/// assert_eq!(config.max_size(), None);
///
/// let config = BufferConfig::default().with_max_size(Some(1 << 20));
/// assert_eq!(config.max_size(), Some(1 << 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferConfig {
    /// Effective chunk size in bytes.
    chunk_size: usize,

    /// Maximum size in bytes, `None` when unbounded.
    max_size: Option<usize>,
}

impl BufferConfig {
    /// Creates an unbounded configuration with the given chunk size.
    ///
    /// Chunk sizes below [`MIN_CHUNK_SIZE`] are clamped up.
    pub const fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: effective_chunk_size(chunk_size),
            max_size: None,
        }
    }

    /// Sets the chunk size, clamping it to [`MIN_CHUNK_SIZE`].
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = effective_chunk_size(chunk_size);
        self
    }

    /// Sets the maximum size in bytes (`None` for unbounded).
    pub const fn with_max_size(mut self, max_size: Option<usize>) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the maximum size from a size specification such as `"10k"`.
    ///
    /// An empty specification removes the bound.
    ///
    /// # Errors
    ///
    /// See [`parse_size_spec`].
    pub fn with_max_size_spec(mut self, spec: &str) -> Result<Self, BufferError> {
        self.max_size = parse_size_spec(Some(spec))?;
        Ok(self)
    }

    /// Returns the effective chunk size.
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the maximum size, if bounded.
    pub const fn max_size(&self) -> Option<usize> {
        self.max_size
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}
