//! Owner of the active capture session and its observable state.

use std::sync::Arc;

use tokio::sync::watch;

use super::{CaptureSink, CapturedPayload, state::SharedState};
use crate::{
    frame::{FrameCodec, QrFrameCodec},
    session::{Progress, ReassemblySession},
};

/// Owns one reassembly session per capture screen lifetime.
///
/// The controller hands the camera pipeline a [`CaptureSink`] and the UI
/// a pair of watch subscriptions; downstream consumers claim the decoded
/// payload at most once per session via [`take_payload`].
///
/// [`take_payload`]: SessionController::take_payload
#[derive(Debug)]
pub struct SessionController<C = QrFrameCodec> {
    shared: Arc<SharedState<C>>,
}

impl SessionController<QrFrameCodec> {
    /// Create a controller over the default wire-format codec.
    #[must_use]
    pub fn new() -> Self { Self::with_codec(QrFrameCodec) }
}

impl Default for SessionController<QrFrameCodec> {
    fn default() -> Self { Self::new() }
}

impl<C: FrameCodec> SessionController<C> {
    /// Create a controller over a caller-supplied codec.
    #[must_use]
    pub fn with_codec(codec: C) -> Self {
        Self {
            shared: Arc::new(SharedState::new(ReassemblySession::with_codec(codec))),
        }
    }

    /// Mint a sink feeding this controller's session.
    #[must_use]
    pub fn sink(&self) -> CaptureSink<C> { CaptureSink::new(Arc::clone(&self.shared)) }

    /// Subscribe to progress updates.
    #[must_use]
    pub fn progress(&self) -> watch::Receiver<Progress> { self.shared.subscribe_progress() }

    /// Read the progress value as of now.
    #[must_use]
    pub fn current_progress(&self) -> Progress { self.shared.current_progress() }

    /// Subscribe to completion: the channel holds the payload from the
    /// moment a session completes until it is taken or reset.
    #[must_use]
    pub fn completions(&self) -> watch::Receiver<Option<CapturedPayload>> {
        self.shared.subscribe_payload()
    }

    /// Claim the completed payload, leaving `None` for later callers.
    ///
    /// This is the seam to downstream consumption (payload parsing,
    /// signing): at most one caller observes the payload per session.
    #[must_use]
    pub fn take_payload(&self) -> Option<CapturedPayload> { self.shared.take_payload() }

    /// Abandon the in-progress capture and clear all observable state.
    ///
    /// Idempotent. Covers manual cancel, navigation away from the capture
    /// screen, and starting a fresh capture after a payload hand-off.
    pub fn reset(&self) { self.shared.reset(); }
}
