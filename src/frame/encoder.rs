//! Sending-side helper that splits payloads into QR-sized frames.
//!
//! [`FrameEncoder`] mirrors the scanning-side codec: each produced frame
//! carries the header from [`FrameHeader`](crate::frame::FrameHeader) so
//! any one of them reveals the whole-message geometry. The display loop
//! that cycles the frames through an animated QR code lives with the UI,
//! not here.

use std::num::NonZeroUsize;

use super::{FrameCount, FrameError, FrameHeader, FrameIndex};

/// Splits payloads into frames sized for one QR symbol each.
#[derive(Clone, Copy, Debug)]
pub struct FrameEncoder {
    slice_capacity: NonZeroUsize,
}

impl FrameEncoder {
    /// Derive an encoder from the largest byte string one QR symbol may
    /// carry.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::BudgetTooSmall`] when the budget cannot fit
    /// the header plus at least one payload byte.
    pub fn for_frame_budget(budget: usize) -> Result<Self, FrameError> {
        let available = budget.saturating_sub(FrameHeader::WIRE_SIZE);
        match NonZeroUsize::new(available) {
            Some(slice_capacity) => Ok(Self { slice_capacity }),
            None => Err(FrameError::BudgetTooSmall { budget }),
        }
    }

    /// Maximum payload bytes carried by a single frame.
    #[must_use]
    pub const fn slice_capacity(&self) -> NonZeroUsize { self.slice_capacity }

    /// Split `payload` into encoded frames.
    ///
    /// Payloads that fit one frame produce a single frame declaring a
    /// total of one; larger payloads are split into capacity-sized slices
    /// with the last one shorter.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::PayloadTooLarge`] when the payload length
    /// exceeds the declared-length field, or
    /// [`FrameError::FrameCountOverflow`] when it would need more frames
    /// than the total field can carry.
    pub fn encode(&self, payload: &[u8]) -> Result<Vec<Vec<u8>>, FrameError> {
        let declared_len = u32::try_from(payload.len()).map_err(|_| FrameError::PayloadTooLarge {
            len: payload.len(),
        })?;
        let capacity = self.slice_capacity.get();
        let required = payload.len().div_ceil(capacity).max(1);
        let total = u16::try_from(required)
            .ok()
            .and_then(FrameCount::new)
            .ok_or(FrameError::FrameCountOverflow { required })?;

        if payload.is_empty() {
            let header = FrameHeader::new(declared_len, FrameIndex::zero(), total)?;
            return Ok(vec![header.encode(payload)]);
        }

        let mut frames = Vec::with_capacity(required);
        for (position, slice) in payload.chunks(capacity).enumerate() {
            let index = FrameIndex::try_from(position)
                .map_err(|_| FrameError::FrameCountOverflow { required })?;
            let header = FrameHeader::new(declared_len, index, total)?;
            frames.push(header.encode(slice));
        }
        Ok(frames)
    }
}
