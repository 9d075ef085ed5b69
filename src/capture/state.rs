//! Shared mutable state behind the sink and controller handles.
//!
//! All session mutation funnels through one mutex so "check dedup then
//! insert" and "check count then reassemble" stay atomic with respect to
//! concurrent detection events, and a one-shot flag latches the first
//! completion so the payload is published exactly once per session.

use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::watch;

use super::CapturedPayload;
use crate::{
    frame::FrameCodec,
    session::{FrameAcceptance, Progress, ReassemblySession},
};

/// State shared by every handle minted for one capture screen.
#[derive(Debug)]
pub(crate) struct SharedState<C> {
    session: Mutex<ReassemblySession<C>>,
    progress_tx: watch::Sender<Progress>,
    payload_tx: watch::Sender<Option<CapturedPayload>>,
    completed: AtomicBool,
}

impl<C: FrameCodec> SharedState<C> {
    pub(crate) fn new(session: ReassemblySession<C>) -> Self {
        let (progress_tx, _) = watch::channel(Progress::idle());
        let (payload_tx, _) = watch::channel(None);
        Self {
            session: Mutex::new(session),
            progress_tx,
            payload_tx,
            completed: AtomicBool::new(false),
        }
    }

    /// Run one detection event through the session under the lock.
    pub(crate) fn process_frame(&self, raw: &[u8]) {
        let mut session = self.lock_session();
        if self.completed.load(Ordering::Acquire) {
            // A payload is awaiting hand-off; a camera still pointed at
            // the code must not restart accumulation.
            return;
        }

        let acceptance = session.accept(raw);
        self.progress_tx.send_replace(session.progress());

        if let FrameAcceptance::Complete(payload) = acceptance {
            if !self.completed.swap(true, Ordering::AcqRel) {
                self.payload_tx
                    .send_replace(Some(CapturedPayload::new(payload)));
            }
        }
    }

    /// Clear the session and every observable derived from it.
    pub(crate) fn reset(&self) {
        let mut session = self.lock_session();
        session.reset();
        self.completed.store(false, Ordering::Release);
        self.payload_tx.send_replace(None);
        self.progress_tx.send_replace(session.progress());
    }

    pub(crate) fn subscribe_progress(&self) -> watch::Receiver<Progress> {
        self.progress_tx.subscribe()
    }

    pub(crate) fn current_progress(&self) -> Progress { *self.progress_tx.borrow() }

    pub(crate) fn subscribe_payload(&self) -> watch::Receiver<Option<CapturedPayload>> {
        self.payload_tx.subscribe()
    }

    pub(crate) fn take_payload(&self) -> Option<CapturedPayload> {
        self.payload_tx.send_replace(None)
    }

    fn lock_session(&self) -> MutexGuard<'_, ReassemblySession<C>> {
        // A poisoned lock means a prior panic mid-transition; the session
        // stays usable and the next reset clears any partial state.
        match self.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
