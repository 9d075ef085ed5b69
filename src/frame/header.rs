//! Wire layout of the per-frame header.
//!
//! Every frame repeats the whole-message geometry so the scanning side can
//! discover the declared total from whichever frame it happens to decode
//! first. The layout is big-endian:
//!
//! ```text
//! [flag u8][declared payload length u32][frame index u16][total count u16][payload slice]
//! ```

use bytes::{Buf, BufMut};

use super::{FrameCount, FrameError, FrameIndex};

/// Flag byte marking a frame that carries an entire message.
const FLAG_SINGLE: u8 = 0x00;
/// Flag byte marking one frame of a multi-frame message.
const FLAG_MULTIPART: u8 = 0x01;

/// Header prefixed to every frame.
///
/// # Examples
///
/// ```
/// use airframe::frame::{FrameCount, FrameHeader, FrameIndex};
/// let total = FrameCount::new(3).expect("non-zero");
/// let header = FrameHeader::new(12, FrameIndex::zero(), total).expect("valid header");
/// assert!(header.is_multipart());
/// assert_eq!(header.payload_len(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
    payload_len: u32,
    index: FrameIndex,
    total: FrameCount,
}

impl FrameHeader {
    /// Encoded size of the header in bytes.
    pub const WIRE_SIZE: usize = 9;

    /// Create a header, validating that `index` falls below `total`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::IndexOutOfRange`] when `index` is not below
    /// `total`.
    pub fn new(
        payload_len: u32,
        index: FrameIndex,
        total: FrameCount,
    ) -> Result<Self, FrameError> {
        if index.get() >= total.get() {
            return Err(FrameError::IndexOutOfRange { index, total });
        }
        Ok(Self {
            payload_len,
            index,
            total,
        })
    }

    /// Byte length of the fully reassembled payload.
    #[must_use]
    pub const fn payload_len(&self) -> u32 { self.payload_len }

    /// This frame's position within the sequence.
    #[must_use]
    pub const fn index(&self) -> FrameIndex { self.index }

    /// Total frame count the sender declared for the message.
    #[must_use]
    pub const fn total(&self) -> FrameCount { self.total }

    /// Report whether the message spans more than one frame.
    #[must_use]
    pub const fn is_multipart(&self) -> bool { self.total.get() > 1 }

    /// Parse a header from the front of `raw`, returning it with the
    /// remaining payload slice.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] when the header is truncated, the flag byte
    /// is unknown or disagrees with the declared total, the total is zero,
    /// or the index is out of range.
    pub fn parse(raw: &[u8]) -> Result<(Self, &[u8]), FrameError> {
        if raw.len() < Self::WIRE_SIZE {
            return Err(FrameError::TruncatedHeader {
                expected: Self::WIRE_SIZE,
                found: raw.len(),
            });
        }

        let mut buf = raw;
        let flag = buf.get_u8();
        if flag != FLAG_SINGLE && flag != FLAG_MULTIPART {
            return Err(FrameError::InvalidFlag { flag });
        }
        let payload_len = buf.get_u32();
        let index = FrameIndex::new(buf.get_u16());
        let total = FrameCount::new(buf.get_u16()).ok_or(FrameError::ZeroTotal)?;

        if (flag == FLAG_MULTIPART) != (total.get() > 1) {
            return Err(FrameError::FlagMismatch { flag, total });
        }
        if index.get() >= total.get() {
            return Err(FrameError::IndexOutOfRange { index, total });
        }

        Ok((
            Self {
                payload_len,
                index,
                total,
            },
            buf,
        ))
    }

    /// Encode the header followed by `slice` into a standalone frame.
    #[must_use]
    pub fn encode(&self, slice: &[u8]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::WIRE_SIZE + slice.len());
        buf.put_u8(if self.is_multipart() {
            FLAG_MULTIPART
        } else {
            FLAG_SINGLE
        });
        buf.put_u32(self.payload_len);
        buf.put_u16(self.index.get());
        buf.put_u16(self.total.get());
        buf.put_slice(slice);
        buf
    }
}
