//! Codec contract consumed by the scanning-side session.
//!
//! [`FrameCodec`] is the seam between the reassembly state machine and the
//! framing format: the session treats frames as opaque bytes and defers
//! every judgement about message geometry and payload validity to the
//! codec. [`QrFrameCodec`] implements the contract for the wire layout in
//! [`FrameHeader`].

use std::collections::HashSet;

use super::{FrameCount, FrameError, FrameHeader, ReassembleError};

/// Contract the reassembly session depends on.
///
/// `reassemble` is the sole authority on payload correctness: the session
/// never assumes success just because its frame count reached the
/// declared total.
pub trait FrameCodec {
    /// Report how many frames the sender declared for the message `raw`
    /// belongs to. Single-frame messages report a count of one.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] when the bytes do not carry a valid frame
    /// header.
    fn declared_frame_count(&self, raw: &[u8]) -> Result<FrameCount, FrameError>;

    /// Order and concatenate a set of distinct frames into the original
    /// payload, validating the result.
    ///
    /// # Errors
    ///
    /// Returns [`ReassembleError`] when the set cannot reconstruct a
    /// valid message: frames missing, geometry conflicts between members,
    /// or a declared-length mismatch.
    fn reassemble(&self, frames: &HashSet<Vec<u8>>) -> Result<Vec<u8>, ReassembleError>;
}

/// Default codec over the wire layout in [`FrameHeader`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QrFrameCodec;

impl FrameCodec for QrFrameCodec {
    fn declared_frame_count(&self, raw: &[u8]) -> Result<FrameCount, FrameError> {
        let (header, _) = FrameHeader::parse(raw)?;
        Ok(header.total())
    }

    fn reassemble(&self, frames: &HashSet<Vec<u8>>) -> Result<Vec<u8>, ReassembleError> {
        let mut parsed = Vec::with_capacity(frames.len());
        for raw in frames {
            parsed.push(FrameHeader::parse(raw)?);
        }
        let Some(&(first, _)) = parsed.first() else {
            return Err(ReassembleError::EmptySet);
        };

        for &(header, _) in &parsed {
            if header.payload_len() != first.payload_len() || header.total() != first.total() {
                return Err(ReassembleError::ConflictingHeaders {
                    expected_len: first.payload_len(),
                    expected_total: first.total(),
                    found_len: header.payload_len(),
                    found_total: header.total(),
                });
            }
        }

        let total = first.total();
        let mut slices: Vec<Option<&[u8]>> = vec![None; usize::from(total.get())];
        for &(header, slice) in &parsed {
            let slot = &mut slices[usize::from(header.index().get())];
            if slot.is_some() {
                return Err(ReassembleError::DuplicateIndex {
                    index: header.index(),
                });
            }
            *slot = Some(slice);
        }

        let captured = slices.iter().filter(|slot| slot.is_some()).count();
        if captured < usize::from(total.get()) {
            return Err(ReassembleError::MissingFrames { captured, total });
        }

        let mut payload = Vec::with_capacity(first.payload_len() as usize);
        for slice in slices.into_iter().flatten() {
            payload.extend_from_slice(slice);
        }
        if payload.len() != first.payload_len() as usize {
            return Err(ReassembleError::LengthMismatch {
                declared: first.payload_len(),
                actual: payload.len(),
            });
        }
        Ok(payload)
    }
}
