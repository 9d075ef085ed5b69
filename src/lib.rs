#![doc(html_root_url = "https://docs.rs/airframe/latest")]
//! Public API for the `airframe` library.
//!
//! This crate provides the transport core for air-gapped QR links: a
//! framing format for splitting payloads across QR symbols, the
//! scanning-side reassembly state machine, and the capture session
//! plumbing that exposes progress and completion to a UI layer.
//!
//! The scanning side receives frames from a live camera feed with no
//! return channel, so the core is built around three facts of that
//! environment: the same frame is read many times, frames arrive in
//! arbitrary order, and misreads are routine. Deduplication, total
//! discovery, and validation all live here; camera handling, QR symbol
//! decoding, and payload interpretation are the embedding application's
//! concern.

pub mod capture;
pub mod frame;
pub mod session;

pub use capture::{CaptureSink, CapturedPayload, SessionController};
pub use frame::{
    FrameCodec,
    FrameCount,
    FrameEncoder,
    FrameError,
    FrameHeader,
    FrameIndex,
    QrFrameCodec,
    ReassembleError,
};
pub use session::{FrameAcceptance, IgnoreReason, Progress, ReassemblySession};
