//! Chunk position tags.
//!
//! Every chunk declares where it sits within its message. The tag travels in
//! the top two bits of the first header byte, so the discriminants here are
//! part of the wire format and must not change.

use derive_more::Display;

/// Position of a chunk within its message.
///
/// A message is delimited by a chunk that starts it (`First` or `Only`) and a
/// chunk that ends it (`Last` or `Only`); `Only` does both for single-chunk
/// messages. The single-letter display form is used in diagnostics.
///
/// # Examples
///
/// ```
/// use chunkwire::ChunkFlag;
/// assert_eq!(ChunkFlag::from_wire_tag(ChunkFlag::Last.wire_tag()), ChunkFlag::Last);
/// assert!(ChunkFlag::Only.starts_message());
/// assert!(ChunkFlag::Only.ends_message());
/// ```
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum ChunkFlag {
    /// Interior chunk of a multi-chunk message.
    #[display("M")]
    Middle = 0,
    /// First chunk of a multi-chunk message.
    #[display("F")]
    First = 1,
    /// Final chunk of a multi-chunk message.
    #[display("L")]
    Last = 2,
    /// Sole chunk of a single-chunk message.
    #[display("O")]
    Only = 3,
}

impl ChunkFlag {
    /// Return the 2-bit wire tag.
    #[must_use]
    pub const fn wire_tag(self) -> u8 { self as u8 }

    /// Decode a 2-bit wire tag.
    ///
    /// Only the low two bits are inspected, so every input maps to a flag.
    #[must_use]
    pub const fn from_wire_tag(tag: u8) -> Self {
        match tag & 0b11 {
            1 => Self::First,
            2 => Self::Last,
            3 => Self::Only,
            _ => Self::Middle,
        }
    }

    /// Whether this flag begins a new message.
    #[must_use]
    pub const fn starts_message(self) -> bool { matches!(self, Self::First | Self::Only) }

    /// Whether this flag completes a message.
    #[must_use]
    pub const fn ends_message(self) -> bool { matches!(self, Self::Last | Self::Only) }
}
