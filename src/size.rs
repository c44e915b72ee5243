//! Configured bound on chunk payload sizes.

/// Largest payload length the extended header form can declare (13 bits).
pub const MAX_CHUNK_PAYLOAD: usize = 0x1fff;

/// Maximum number of payload bytes carried by a single chunk.
///
/// Construction clamps rather than rejects: zero and anything above
/// [`MAX_CHUNK_PAYLOAD`] are silently replaced by the maximum, so a
/// misconfigured caller still produces well-formed chunks.
///
/// # Examples
///
/// ```
/// use chunkwire::{ChunkSize, MAX_CHUNK_PAYLOAD};
/// assert_eq!(ChunkSize::new(20).get(), 20);
/// assert_eq!(ChunkSize::new(0).get(), MAX_CHUNK_PAYLOAD);
/// assert_eq!(ChunkSize::new(100_000).get(), MAX_CHUNK_PAYLOAD);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkSize(usize);

impl ChunkSize {
    /// The largest permitted chunk size.
    pub const MAX: Self = Self(MAX_CHUNK_PAYLOAD);

    /// Create a chunk size, clamping out-of-range values to the maximum.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        if size == 0 || size > MAX_CHUNK_PAYLOAD {
            Self::MAX
        } else {
            Self(size)
        }
    }

    /// Return the size in bytes.
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

impl Default for ChunkSize {
    fn default() -> Self { Self::MAX }
}

impl From<usize> for ChunkSize {
    fn from(value: usize) -> Self { Self::new(value) }
}
