//! Capture-side plumbing between the camera pipeline and the UI layer.
//!
//! [`CaptureSink`] adapts per-barcode detection callbacks into session
//! transitions under a single lock, and [`SessionController`] owns the
//! session lifetime, exposing progress and the completed payload as watch
//! channels for the embedding application to observe.

mod controller;
mod payload;
mod sink;
mod state;

pub use controller::SessionController;
pub use payload::CapturedPayload;
pub use sink::CaptureSink;

#[cfg(test)]
mod tests;
