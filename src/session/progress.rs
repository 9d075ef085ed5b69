//! Capture progress reported to the UI layer.

use serde::Serialize;

use crate::frame::FrameCount;

/// Captured-versus-declared frame counts for one session.
///
/// Recomputed from the accumulated set after every processed frame, so it
/// cannot drift from the session state it describes. The declared total
/// stays `None` until any frame reveals it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Progress {
    captured: usize,
    total: Option<FrameCount>,
}

impl Progress {
    /// Progress of a session that has seen no frames.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            captured: 0,
            total: None,
        }
    }

    pub(crate) const fn new(captured: usize, total: Option<FrameCount>) -> Self {
        Self { captured, total }
    }

    /// Number of distinct frames captured so far.
    #[must_use]
    pub const fn captured(&self) -> usize { self.captured }

    /// Declared frame total, if any frame has revealed it yet.
    #[must_use]
    pub const fn declared_total(&self) -> Option<FrameCount> { self.total }

    /// Fraction of the declared total captured so far.
    ///
    /// Zero while the total is still unknown. Content-based deduplication
    /// lets the set outgrow the declared total, so values above one are
    /// possible and left uncapped.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        match self.total {
            #[expect(clippy::cast_precision_loss, reason = "frame counts are far below 2^23")]
            Some(total) => self.captured as f32 / f32::from(total.get()),
            None => 0.0,
        }
    }
}
