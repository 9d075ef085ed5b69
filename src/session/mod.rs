//! Scanning-side accumulation state machine.
//!
//! [`ReassemblySession`] owns the distinct frames seen for one in-progress
//! capture. It deduplicates redundant camera reads, discovers the declared
//! frame total from whichever frame parses first, and asks the codec to
//! reassemble once the set plausibly covers the message. Decode failures
//! never escape: a live camera stream produces transient misreads, so a
//! bad frame is logged and dropped while the capture continues.

pub mod progress;

pub use progress::Progress;

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::frame::{FrameCodec, FrameCount, QrFrameCodec, ReassembleError};

/// Reason a frame produced no state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The capture event carried no bytes.
    Empty,
    /// The exact byte sequence is already accumulated.
    Duplicate,
    /// The bytes do not parse as a frame header; treated as a misread.
    Malformed,
    /// A single-frame message failed validation and was discarded whole.
    InvalidSingleFrame,
}

/// Outcome of feeding one raw frame to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameAcceptance {
    /// The frame was dropped without touching session state.
    Ignored(IgnoreReason),
    /// The frame was accumulated; more are needed.
    Accumulating(Progress),
    /// The frame completed the message; the session has cleared itself
    /// for the next capture.
    Complete(Vec<u8>),
}

/// Accumulation state for one in-progress multi-frame capture.
///
/// The session is generic over the codec so tests can observe codec
/// calls and alternative framings can plug in; production code uses the
/// default [`QrFrameCodec`].
#[derive(Debug)]
pub struct ReassemblySession<C = QrFrameCodec> {
    codec: C,
    frames: HashSet<Vec<u8>>,
    declared_total: Option<FrameCount>,
}

impl ReassemblySession<QrFrameCodec> {
    /// Create a session over the default wire-format codec.
    #[must_use]
    pub fn new() -> Self { Self::with_codec(QrFrameCodec) }
}

impl Default for ReassemblySession<QrFrameCodec> {
    fn default() -> Self { Self::new() }
}

impl<C: FrameCodec> ReassemblySession<C> {
    /// Create a session over a caller-supplied codec.
    #[must_use]
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            frames: HashSet::new(),
            declared_total: None,
        }
    }

    /// Number of distinct frames accumulated so far.
    #[must_use]
    pub fn captured(&self) -> usize { self.frames.len() }

    /// Declared frame total, once any frame has revealed it.
    #[must_use]
    pub fn declared_total(&self) -> Option<FrameCount> { self.declared_total }

    /// Whether the session holds no accumulated state.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.frames.is_empty() && self.declared_total.is_none() }

    /// Current progress, recomputed from the accumulated set.
    #[must_use]
    pub fn progress(&self) -> Progress { Progress::new(self.frames.len(), self.declared_total) }

    /// Clear all accumulated state, returning the session to empty.
    ///
    /// Callable at any time, including mid-accumulation, and idempotent.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.declared_total = None;
    }

    /// Feed one decoded barcode read into the session.
    ///
    /// Duplicates and noise are dropped, accumulation updates progress,
    /// and a completing frame yields the reassembled payload. No failure
    /// escapes as an error: a transient misread must not abort an
    /// in-progress capture.
    pub fn accept(&mut self, raw: &[u8]) -> FrameAcceptance {
        if raw.is_empty() {
            return FrameAcceptance::Ignored(IgnoreReason::Empty);
        }
        // Dedup by exact byte content, checked before any parsing.
        if self.frames.contains(raw) {
            trace!(len = raw.len(), "duplicate frame ignored");
            return FrameAcceptance::Ignored(IgnoreReason::Duplicate);
        }
        match self.declared_total {
            None => self.accept_first(raw),
            Some(total) => self.accumulate(raw, total),
        }
    }

    fn accept_first(&mut self, raw: &[u8]) -> FrameAcceptance {
        let total = match self.codec.declared_frame_count(raw) {
            Ok(total) => total,
            Err(err) => {
                debug!(error = %err, len = raw.len(), "misread frame ignored");
                return FrameAcceptance::Ignored(IgnoreReason::Malformed);
            }
        };

        if total.is_single() {
            // Single-frame fast path: validate immediately and never enter
            // multi-frame accumulation.
            let lone = HashSet::from([raw.to_vec()]);
            return match self.codec.reassemble(&lone) {
                Ok(payload) => FrameAcceptance::Complete(payload),
                Err(err) => {
                    debug!(error = %err, "single-frame message failed validation");
                    FrameAcceptance::Ignored(IgnoreReason::InvalidSingleFrame)
                }
            };
        }

        self.declared_total = Some(total);
        self.frames.insert(raw.to_vec());
        FrameAcceptance::Accumulating(self.progress())
    }

    fn accumulate(&mut self, raw: &[u8], total: FrameCount) -> FrameAcceptance {
        self.frames.insert(raw.to_vec());
        // The sender's total is trusted with one frame of slack; the codec
        // stays the sole authority on whether the set reassembles.
        if self.frames.len() + 1 >= usize::from(total.get()) {
            match self.codec.reassemble(&self.frames) {
                Ok(payload) => {
                    self.reset();
                    return FrameAcceptance::Complete(payload);
                }
                Err(err) => {
                    debug!(
                        error = %err,
                        captured = self.frames.len(),
                        total = total.get(),
                        "frame set does not reassemble yet",
                    );
                }
            }
        }
        FrameAcceptance::Accumulating(self.progress())
    }
}

#[cfg(test)]
mod tests;
