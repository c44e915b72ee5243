//! Outbound splitter that turns payloads into transport-sized chunks.
//!
//! [`Chunker`] walks a payload in strides of the configured [`ChunkSize`],
//! tagging each slice with a [`ChunkHeader`]. The struct holds no mutable
//! state, so one instance may be shared freely across callers.

use crate::{flag::ChunkFlag, header::ChunkHeader, size::ChunkSize};

/// Splits payloads into chunks no larger than a configured size.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chunker {
    chunk_size: ChunkSize,
}

impl Chunker {
    /// Create a chunker capping chunk payloads at `chunk_size` bytes.
    #[must_use]
    pub const fn new(chunk_size: ChunkSize) -> Self { Self { chunk_size } }

    /// Return the configured chunk payload cap.
    #[must_use]
    pub const fn chunk_size(&self) -> ChunkSize { self.chunk_size }

    /// Split `payload` into an ordered run of chunks.
    ///
    /// The first chunk is tagged [`ChunkFlag::First`] when more follow and
    /// [`ChunkFlag::Only`] otherwise; later chunks are [`ChunkFlag::Middle`]
    /// until the final [`ChunkFlag::Last`]. An empty payload still produces
    /// one zero-length `Only` chunk, so every message occupies at least one
    /// packet on the wire. Concatenating the chunk payloads in order
    /// reproduces `payload` exactly.
    #[must_use]
    pub fn chunk(&self, payload: &[u8]) -> ChunkBatch {
        let size = self.chunk_size.get();
        let total = payload.len();
        if total == 0 {
            return ChunkBatch::new(vec![Chunk::new(ChunkFlag::Only, Vec::new())]);
        }

        let mut chunks = Vec::with_capacity(total.div_ceil(size));
        let mut offset = 0_usize;
        while offset < total {
            let end = (offset + size).min(total);
            let flag = match (offset == 0, end < total) {
                (true, true) => ChunkFlag::First,
                (true, false) => ChunkFlag::Only,
                (false, true) => ChunkFlag::Middle,
                (false, false) => ChunkFlag::Last,
            };
            chunks.push(Chunk::new(flag, payload[offset..end].to_vec()));
            offset = end;
        }
        ChunkBatch::new(chunks)
    }
}

/// Split `payload` and encode each chunk for the wire.
///
/// Convenience wrapper over [`Chunker`] for callers that only want the raw
/// packets. `chunk_size` is clamped the same way as [`ChunkSize::new`].
#[must_use]
pub fn make_chunks(payload: &[u8], chunk_size: usize) -> Vec<Vec<u8>> {
    Chunker::new(ChunkSize::new(chunk_size))
        .chunk(payload)
        .encode_all()
}

/// Header and payload for a single chunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    header: ChunkHeader,
    payload: Vec<u8>,
}

impl Chunk {
    /// Construct a chunk, deriving the header from the payload length.
    #[must_use]
    pub fn new(flag: ChunkFlag, payload: Vec<u8>) -> Self {
        Self {
            header: ChunkHeader::new(flag, payload.len()),
            payload,
        }
    }

    /// Return the chunk header.
    #[must_use]
    pub const fn header(&self) -> ChunkHeader { self.header }

    /// Return the chunk payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] { self.payload.as_slice() }

    /// Encode the chunk for the wire: header bytes followed by the payload.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.header.encoded_len() + self.payload.len());
        self.header.encode_into(&mut buf);
        buf.extend_from_slice(&self.payload);
        buf
    }

    /// Consume the chunk, returning its components.
    #[must_use]
    pub fn into_parts(self) -> (ChunkHeader, Vec<u8>) { (self.header, self.payload) }
}

/// Ordered run of chunks produced for a single message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkBatch {
    chunks: Vec<Chunk>,
}

impl ChunkBatch {
    fn new(chunks: Vec<Chunk>) -> Self {
        debug_assert!(!chunks.is_empty(), "chunk batches must not be empty");
        Self { chunks }
    }

    /// Return the chunks as a slice.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk] { self.chunks.as_slice() }

    /// Number of chunks in the batch.
    #[expect(
        clippy::len_without_is_empty,
        reason = "batches are guaranteed non-empty"
    )]
    #[must_use]
    pub fn len(&self) -> usize { self.chunks.len() }

    /// Whether the message needed more than one chunk.
    #[must_use]
    pub fn is_split(&self) -> bool { self.len() > 1 }

    /// Encode every chunk for the wire, in order.
    #[must_use]
    pub fn encode_all(&self) -> Vec<Vec<u8>> { self.chunks.iter().map(Chunk::encode).collect() }

    /// Consume the batch, returning all chunks.
    #[must_use]
    pub fn into_chunks(self) -> Vec<Chunk> { self.chunks }
}

impl IntoIterator for ChunkBatch {
    type Item = Chunk;
    type IntoIter = std::vec::IntoIter<Chunk>;

    fn into_iter(self) -> Self::IntoIter { self.chunks.into_iter() }
}
