//! Entry point invoked once per detected barcode read.

use std::sync::Arc;

use super::state::SharedState;
use crate::frame::{FrameCodec, QrFrameCodec};

/// Feeds raw detection events into the owning session.
///
/// Handles are cheap to clone and safe to call from the capture
/// pipeline's own threads: every transition runs under the session lock
/// and completion is signalled exactly once.
#[derive(Debug)]
pub struct CaptureSink<C = QrFrameCodec> {
    shared: Arc<SharedState<C>>,
}

impl<C> Clone for CaptureSink<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C: FrameCodec> CaptureSink<C> {
    pub(crate) fn new(shared: Arc<SharedState<C>>) -> Self { Self { shared } }

    /// Process one detected barcode's decoded bytes.
    ///
    /// Never blocks on I/O and never fails: noise frames are logged and
    /// dropped so an in-progress capture survives misreads. Effects are
    /// visible only through the controller's progress and completion
    /// observables.
    pub fn on_frame_detected(&self, raw: &[u8]) { self.shared.process_frame(raw); }
}
