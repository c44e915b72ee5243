//! Inbound state machine that stitches chunks back into messages.
//!
//! [`Dechunker`] mirrors the outbound [`Chunker`](crate::Chunker). One
//! instance serves one logical stream and must be fed chunks one at a time,
//! in delivery order; it performs no internal locking because the intended
//! transports already serialise delivery per direction. A malformed chunk is
//! rejected without disturbing the partial message, so the caller chooses
//! the recovery policy.

use std::time::{Duration, Instant};

use log::debug;

use crate::{error::DechunkError, flag::ChunkFlag, header::ChunkHeader};

/// A fully reassembled message with completion diagnostics.
///
/// The chunk count and elapsed time are advisory observability data; only
/// the payload is part of the framing contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembledMessage {
    payload: Vec<u8>,
    chunk_count: usize,
    elapsed: Duration,
}

impl AssembledMessage {
    /// Borrow the reassembled payload.
    #[must_use]
    pub fn payload(&self) -> &[u8] { self.payload.as_slice() }

    /// Consume the message, returning the owned payload bytes.
    #[must_use]
    pub fn into_payload(self) -> Vec<u8> { self.payload }

    /// Number of chunks the message arrived in.
    #[must_use]
    pub const fn chunk_count(&self) -> usize { self.chunk_count }

    /// Wall-clock time from the message's first chunk to its last.
    #[must_use]
    pub const fn elapsed(&self) -> Duration { self.elapsed }
}

#[derive(Debug, Default)]
enum Phase {
    /// No message in progress.
    #[default]
    Idle,
    /// Accumulating chunks for the message started at `started_at`.
    Assembling {
        buffer: Vec<u8>,
        chunk_count: usize,
        started_at: Instant,
    },
}

/// Reassembles one logical stream of chunks into messages.
///
/// # Examples
///
/// ```
/// use chunkwire::{Chunker, ChunkSize, Dechunker};
///
/// let chunker = Chunker::new(ChunkSize::new(4));
/// let mut dechunker = Dechunker::new();
///
/// let mut assembled = None;
/// for chunk in chunker.chunk(b"hello, chunked world") {
///     assembled = dechunker.add_chunk(&chunk.encode()).expect("well-formed chunk");
/// }
/// let message = assembled.expect("final chunk completes the message");
/// assert_eq!(message.payload(), b"hello, chunked world");
/// ```
#[derive(Debug, Default)]
pub struct Dechunker {
    phase: Phase,
}

impl Dechunker {
    /// Create a dechunker with no message in progress.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Whether a partially assembled message is pending.
    #[must_use]
    pub const fn is_assembling(&self) -> bool { matches!(self.phase, Phase::Assembling { .. }) }

    /// Feed one received chunk.
    ///
    /// Returns `Ok(Some(_))` when the chunk completes a message and
    /// `Ok(None)` while more chunks are required. Feeding a
    /// [`ChunkFlag::First`] or [`ChunkFlag::Only`] chunk mid-assembly
    /// silently abandons the partial message and starts over.
    ///
    /// # Errors
    ///
    /// Returns [`DechunkError`] when the chunk is malformed or a
    /// continuation arrives with no message in progress. Accumulation state
    /// is left untouched on every error.
    pub fn add_chunk(&mut self, bytes: &[u8]) -> Result<Option<AssembledMessage>, DechunkError> {
        self.add_chunk_at(bytes, Instant::now())
    }

    /// Feed one received chunk using an explicit clock reading.
    ///
    /// Accepting `now` keeps the completion timing deterministic in tests.
    ///
    /// # Errors
    ///
    /// Same as [`add_chunk`](Self::add_chunk).
    pub fn add_chunk_at(
        &mut self,
        bytes: &[u8],
        now: Instant,
    ) -> Result<Option<AssembledMessage>, DechunkError> {
        let (header, header_len) = ChunkHeader::decode(bytes)?;
        let data = &bytes[header_len..];
        if header.len() != data.len() {
            return Err(DechunkError::LengthMismatch {
                declared: header.len(),
                actual: data.len(),
            });
        }

        match header.flag() {
            ChunkFlag::First => {
                self.log_abandoned(header);
                self.phase = Phase::Assembling {
                    buffer: data.to_vec(),
                    chunk_count: 1,
                    started_at: now,
                };
                debug!("dechunker started buffer with {} bytes {header}", data.len());
                Ok(None)
            }
            ChunkFlag::Only => {
                self.log_abandoned(header);
                self.phase = Phase::Idle;
                debug!("dechunker complete: 1 chunk, {} bytes {header}", data.len());
                Ok(Some(AssembledMessage {
                    payload: data.to_vec(),
                    chunk_count: 1,
                    elapsed: Duration::ZERO,
                }))
            }
            ChunkFlag::Middle => {
                let Phase::Assembling {
                    buffer,
                    chunk_count,
                    ..
                } = &mut self.phase
                else {
                    return Err(DechunkError::UnexpectedContinuation {
                        flag: ChunkFlag::Middle,
                    });
                };
                buffer.extend_from_slice(data);
                *chunk_count += 1;
                debug!(
                    "dechunker grew buffer to {} bytes ({} chunks) {header}",
                    buffer.len(),
                    chunk_count
                );
                Ok(None)
            }
            ChunkFlag::Last => match std::mem::take(&mut self.phase) {
                Phase::Assembling {
                    mut buffer,
                    chunk_count,
                    started_at,
                } => {
                    buffer.extend_from_slice(data);
                    let chunk_count = chunk_count + 1;
                    let elapsed = now.saturating_duration_since(started_at);
                    debug!(
                        "dechunker complete: {chunk_count} chunk(s), {} bytes, {elapsed:?}",
                        buffer.len()
                    );
                    Ok(Some(AssembledMessage {
                        payload: buffer,
                        chunk_count,
                        elapsed,
                    }))
                }
                Phase::Idle => Err(DechunkError::UnexpectedContinuation {
                    flag: ChunkFlag::Last,
                }),
            },
        }
    }

    fn log_abandoned(&self, header: ChunkHeader) {
        if let Phase::Assembling {
            buffer, chunk_count, ..
        } = &self.phase
        {
            debug!(
                "dechunker abandoning partial message ({chunk_count} chunks, {} bytes) for new {header}",
                buffer.len()
            );
        }
    }
}
