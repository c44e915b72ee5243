//! Bounded-size chunk framing for small-packet transports.
//!
//! `chunkwire` splits arbitrary-length payloads into chunks that fit a
//! transport's maximum packet size and reassembles them on the far side.
//! Each chunk carries a one- or two-byte header recording its position
//! within the message and its payload length; the receiving [`Dechunker`]
//! accumulates chunks in arrival order and hands back the original payload
//! once the final chunk lands.
//!
//! The crate deliberately stops at framing. Delivery, ordering, and
//! retransmission belong to the transport; [`ChunkSink`] is the only seam a
//! transport must implement to drain outbound chunks.

pub mod chunker;
pub mod dechunker;
pub mod error;
pub mod flag;
pub mod header;
pub mod sender;
pub mod size;

pub use chunker::{Chunk, ChunkBatch, Chunker, make_chunks};
pub use dechunker::{AssembledMessage, Dechunker};
pub use error::DechunkError;
pub use flag::ChunkFlag;
pub use header::{ChunkHeader, SHORT_FORM_MAX};
pub use sender::{ChunkSender, ChunkSink, SendProgress};
pub use size::{ChunkSize, MAX_CHUNK_PAYLOAD};
