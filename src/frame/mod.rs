//! Framing format shared by the sending and scanning sides.
//!
//! A payload too large for one QR symbol travels as a sequence of frames,
//! each prefixed with a small header describing the whole message. Each
//! sub-module focuses on a single concept to keep the code small and easy
//! to audit while still providing a cohesive API at the crate root.

pub mod codec;
pub mod count;
pub mod encoder;
pub mod error;
pub mod header;
pub mod index;

pub use codec::{FrameCodec, QrFrameCodec};
pub use count::FrameCount;
pub use encoder::FrameEncoder;
pub use error::{FrameError, ReassembleError};
pub use header::FrameHeader;
pub use index::FrameIndex;
