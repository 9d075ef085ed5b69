//! Declared frame totals carried in every frame header.

use std::num::NonZeroU16;

use derive_more::{Display, From, Into};
use serde::Serialize;

/// Number of frames the sender declared for one message.
///
/// A message always spans at least one frame, so the wrapped value is
/// non-zero by construction.
///
/// # Examples
///
/// ```
/// use airframe::frame::FrameCount;
/// let count = FrameCount::new(3).expect("non-zero");
/// assert_eq!(count.get(), 3);
/// assert!(!count.is_single());
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into, Serialize,
)]
#[display("{_0}")]
pub struct FrameCount(NonZeroU16);

impl FrameCount {
    /// The count declared by single-frame messages.
    pub const ONE: Self = Self(NonZeroU16::MIN);

    /// Construct a count, returning `None` for zero.
    #[must_use]
    pub const fn new(value: u16) -> Option<Self> {
        match NonZeroU16::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Return the underlying numeric value.
    #[must_use]
    pub const fn get(self) -> u16 { self.0.get() }

    /// Report whether the message fits a single frame.
    #[must_use]
    pub const fn is_single(self) -> bool { self.0.get() == 1 }
}
