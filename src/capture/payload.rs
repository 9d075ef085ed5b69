//! Hand-off wrapper for a successfully reassembled message.

/// Owned payload produced by a completed capture session.
///
/// The framing headers are already stripped and validated; downstream
/// consumers (payload parsing, signing) receive exactly the bytes the
/// sender framed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedPayload {
    bytes: Vec<u8>,
}

impl CapturedPayload {
    pub(crate) fn new(bytes: Vec<u8>) -> Self { Self { bytes } }

    /// Borrow the payload bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] { self.bytes.as_slice() }

    /// Consume the wrapper, returning the owned bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> { self.bytes }

    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    /// Whether the payload carries no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }
}
