//! Chunk header codec.
//!
//! A header is one or two bytes ahead of the chunk payload:
//!
//! ```text
//! byte 0 : [flag:2][ext:1][len_hi_or_len:5]
//! byte 1 : [len_lo:8]            (present only when ext == 1)
//! ```
//!
//! The short form (`ext == 0`) declares lengths up to 31 in a single byte;
//! the extended form spreads a 13-bit length across both bytes. The encoder
//! always picks the short form when the length fits five bits.

use std::fmt;

use crate::{error::DechunkError, flag::ChunkFlag, size::MAX_CHUNK_PAYLOAD};

const FLAG_SHIFT: u32 = 6;
const EXT_BIT: u8 = 0x20;
const LEN_MASK: u8 = 0x1f;

/// Largest payload length the single-byte header form can declare.
pub const SHORT_FORM_MAX: usize = LEN_MASK as usize;

/// Flag and payload length carried at the front of every chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkHeader {
    flag: ChunkFlag,
    len: usize,
}

impl ChunkHeader {
    /// Create a header for a chunk carrying `len` payload bytes.
    ///
    /// Debug builds assert that `len` fits the 13-bit length field; the
    /// chunker never produces a longer payload because chunk sizes are
    /// clamped to [`MAX_CHUNK_PAYLOAD`].
    #[must_use]
    pub const fn new(flag: ChunkFlag, len: usize) -> Self {
        debug_assert!(len <= MAX_CHUNK_PAYLOAD);
        Self { flag, len }
    }

    /// Return the position flag.
    #[must_use]
    pub const fn flag(&self) -> ChunkFlag { self.flag }

    /// Return the declared payload length.
    #[expect(
        clippy::len_without_is_empty,
        reason = "len is the declared payload length, not a container size"
    )]
    #[must_use]
    pub const fn len(&self) -> usize { self.len }

    /// Number of bytes the encoded header occupies: 1 short, 2 extended.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        if self.len <= SHORT_FORM_MAX { 1 } else { 2 }
    }

    /// Append the encoded header to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        let tag = self.flag.wire_tag() << FLAG_SHIFT;
        if self.len <= SHORT_FORM_MAX {
            buf.push(tag | (self.len as u8));
        } else {
            buf.push(tag | EXT_BIT | (((self.len >> 8) as u8) & LEN_MASK));
            buf.push((self.len & 0xff) as u8);
        }
    }

    /// Decode a header from the front of `bytes`.
    ///
    /// Returns the header and the number of bytes it consumed.
    ///
    /// # Errors
    ///
    /// Returns [`DechunkError::EmptyChunk`] when `bytes` is empty, or
    /// [`DechunkError::TruncatedHeader`] when the extended-length bit is set
    /// but the second header byte is missing.
    pub fn decode(bytes: &[u8]) -> Result<(Self, usize), DechunkError> {
        let Some(&byte0) = bytes.first() else {
            return Err(DechunkError::EmptyChunk);
        };
        let flag = ChunkFlag::from_wire_tag(byte0 >> FLAG_SHIFT);
        if byte0 & EXT_BIT == 0 {
            return Ok((Self::new(flag, (byte0 & LEN_MASK) as usize), 1));
        }
        let Some(&byte1) = bytes.get(1) else {
            return Err(DechunkError::TruncatedHeader);
        };
        let len = (((byte0 & LEN_MASK) as usize) << 8) | usize::from(byte1);
        Ok((Self::new(flag, len), 2))
    }
}

impl fmt::Display for ChunkHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.flag, self.len)
    }
}
