//! Error types emitted while decoding chunks.
//!
//! Every variant is a data-level rejection of a single chunk. The
//! [`Dechunker`](crate::Dechunker) leaves its accumulation state untouched on
//! error, so the caller decides whether to drop the message, request a
//! resend, or ignore the bad chunk.

use thiserror::Error;

use crate::flag::ChunkFlag;

/// Errors produced by [`Dechunker::add_chunk`](crate::Dechunker::add_chunk).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DechunkError {
    /// The input held no bytes at all, not even a header.
    #[error("empty chunk")]
    EmptyChunk,
    /// The extended-length bit was set but the second header byte is missing.
    #[error("truncated extended-length header")]
    TruncatedHeader,
    /// The header's declared length disagrees with the trailing byte count.
    #[error("length mismatch: header declares {declared} bytes, found {actual}")]
    LengthMismatch { declared: usize, actual: usize },
    /// A continuation chunk arrived while no message was being assembled.
    #[error("unexpected continuation chunk ({flag}) with no message in progress")]
    UnexpectedContinuation { flag: ChunkFlag },
}
