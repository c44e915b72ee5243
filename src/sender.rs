//! Outbound queue that drains a message's chunks through a transport sink.
//!
//! Transports with a single in-flight write (the original target was a BLE
//! notify characteristic) may refuse a packet when their buffer is full. A
//! refusal means "retry when the transport drains", so [`ChunkSender`] keeps
//! its cursor and re-offers the same chunk on the next flush.

use std::time::Instant;

use log::{debug, trace};

use crate::chunker::ChunkBatch;

/// Transport seam: deliver one opaque packet to the peer.
pub trait ChunkSink {
    /// Attempt to hand one packet to the transport.
    ///
    /// Returning `false` means the transport cannot accept the packet right
    /// now and the same bytes must be offered again later.
    fn send_packet(&mut self, packet: &[u8]) -> bool;
}

impl<F: FnMut(&[u8]) -> bool> ChunkSink for F {
    fn send_packet(&mut self, packet: &[u8]) -> bool { self(packet) }
}

/// Progress reported by [`ChunkSender::flush`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendProgress {
    /// Every chunk of the pending message was handed to the sink.
    Complete,
    /// The sink refused a packet; unsent chunks remain queued.
    Stalled,
    /// No message is pending.
    Idle,
}

/// Drains one pending message's chunks into a [`ChunkSink`], in order.
///
/// The sender owns the encoded packets of at most one message. Loading a new
/// message replaces any unsent remainder of the previous one.
#[derive(Debug, Default)]
pub struct ChunkSender {
    pending: Vec<Vec<u8>>,
    sent: usize,
    started_at: Option<Instant>,
}

impl ChunkSender {
    /// Create a sender with nothing queued.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Queue a message's chunks, replacing any unsent remainder.
    pub fn load(&mut self, batch: &ChunkBatch) {
        if self.is_pending() {
            debug!("chunk sender dropping {} unsent chunk(s)", self.remaining());
        }
        self.pending = batch.encode_all();
        self.sent = 0;
        self.started_at = None;
        debug!("chunk sender queued {} chunk(s)", self.pending.len());
    }

    /// Number of chunks not yet accepted by the sink.
    #[must_use]
    pub fn remaining(&self) -> usize { self.pending.len() - self.sent }

    /// Whether a message is queued with chunks left to send.
    #[must_use]
    pub fn is_pending(&self) -> bool { self.remaining() > 0 }

    /// Push queued chunks into `sink` until it refuses or the message is done.
    ///
    /// A refused packet stays at the front of the queue, so a later flush
    /// resumes with the exact same bytes.
    pub fn flush<S: ChunkSink>(&mut self, sink: &mut S) -> SendProgress {
        if !self.is_pending() {
            return SendProgress::Idle;
        }
        let total = self.pending.len();
        let started_at = *self.started_at.get_or_insert_with(Instant::now);
        while self.sent < total {
            let packet = &self.pending[self.sent];
            if !sink.send_packet(packet) {
                trace!("chunk sender stalled at {}/{total}", self.sent);
                return SendProgress::Stalled;
            }
            self.sent += 1;
            trace!("chunk sender sent {}/{total} ({} bytes)", self.sent, packet.len());
        }
        debug!(
            "chunk sender finished {total} chunk(s) in {:?}",
            started_at.elapsed()
        );
        self.pending.clear();
        self.sent = 0;
        self.started_at = None;
        SendProgress::Complete
    }
}
