//! Error types emitted by the framing layer.
//!
//! Scanning feeds these errors into logging rather than surfacing them: a
//! live camera stream produces transient misreads, so every failure here
//! is recoverable by scanning further frames or resetting the session.

use thiserror::Error;

use super::{FrameCount, FrameIndex};

/// Errors raised while parsing or producing a single frame.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// The bytes end before the fixed-size header is complete.
    #[error("frame header truncated: expected {expected} bytes, found {found}")]
    TruncatedHeader { expected: usize, found: usize },
    /// The multipart flag byte holds an unknown value.
    #[error("unknown multipart flag {flag:#04x}")]
    InvalidFlag { flag: u8 },
    /// The declared total was zero.
    #[error("declared frame count must be non-zero")]
    ZeroTotal,
    /// The multipart flag disagrees with the declared total.
    #[error("multipart flag {flag:#04x} disagrees with declared total {total}")]
    FlagMismatch { flag: u8, total: FrameCount },
    /// The frame index is not below the declared total.
    #[error("frame index {index} out of range for total {total}")]
    IndexOutOfRange { index: FrameIndex, total: FrameCount },
    /// The payload length cannot be described by the wire format.
    #[error("payload of {len} bytes exceeds the declared-length field")]
    PayloadTooLarge { len: usize },
    /// The payload would need more frames than the total field can carry.
    #[error("payload requires {required} frames, exceeding the format maximum")]
    FrameCountOverflow { required: usize },
    /// The frame budget cannot fit the header plus at least one payload byte.
    #[error("frame budget of {budget} bytes leaves no room for payload")]
    BudgetTooSmall { budget: usize },
}

/// Errors raised when a frame set fails to reassemble into a payload.
///
/// Every variant means the same thing to the session: the accumulated set
/// does not reconstruct a valid message yet. The variants exist so
/// diagnostics can say why.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReassembleError {
    /// The set holds no frames.
    #[error("cannot reassemble an empty frame set")]
    EmptySet,
    /// A member of the set does not parse as a frame.
    #[error("frame set member failed to parse: {0}")]
    MalformedMember(#[from] FrameError),
    /// Members disagree about the message geometry.
    #[error(
        "conflicting frame headers: {expected_len} bytes over {expected_total} frames \
         vs {found_len} bytes over {found_total} frames"
    )]
    ConflictingHeaders {
        expected_len: u32,
        expected_total: FrameCount,
        found_len: u32,
        found_total: FrameCount,
    },
    /// Two distinct frames claim the same index.
    #[error("duplicate frames for index {index}")]
    DuplicateIndex { index: FrameIndex },
    /// The set does not yet cover every declared index.
    #[error("frame set covers {captured} of {total} frames")]
    MissingFrames { captured: usize, total: FrameCount },
    /// The concatenated payload does not match the declared length.
    #[error("reassembled {actual} bytes but frames declared {declared}")]
    LengthMismatch { declared: u32, actual: usize },
}
