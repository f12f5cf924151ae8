use heapless::Vec;

use crate::config::{Polarity, frame_len};
use crate::glyph::{BLANK, DOT};

/// Maximum number of digit positions a select register can address
pub const MAX_DIGITS: usize = 8;

/// Segment bytes ready to be shifted out, one per digit position
///
/// Positions are ordered left to right and already adjusted for polarity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedFrame {
    segments: Vec<u8, MAX_DIGITS>,
}

impl EncodedFrame {
    /// Create a frame of `digit_count` blank positions
    pub fn blank(digit_count: u8, polarity: Polarity) -> Self {
        let segments = (0..frame_len(digit_count))
            .map(|_| polarity.segments(BLANK))
            .collect();
        Self { segments }
    }

    /// Wrap raw segment bytes without any adjustment
    ///
    /// Bytes past [`MAX_DIGITS`] are dropped.
    pub fn from_raw(segments: &[u8]) -> Self {
        let segments = segments.iter().copied().take(MAX_DIGITS).collect();
        Self { segments }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, u8> {
        self.segments.iter()
    }

    /// Copy of at most the first `len` positions
    pub(crate) fn truncated(&self, len: usize) -> Self {
        Self::from_raw(&self.segments[..len.min(self.segments.len())])
    }

    /// Convert a common-cathode frame to the given polarity
    pub(crate) fn normalize(mut self, polarity: Polarity) -> Self {
        for segment in &mut self.segments {
            *segment = polarity.segments(*segment);
        }
        self
    }
}

impl From<Vec<u8, MAX_DIGITS>> for EncodedFrame {
    fn from(segments: Vec<u8, MAX_DIGITS>) -> Self {
        Self { segments }
    }
}

impl<'a> IntoIterator for &'a EncodedFrame {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a common-cathode frame from the rightmost position leftwards
///
/// Positions never written stay blank.
pub(crate) struct RightAligned {
    cells: [u8; MAX_DIGITS],
    len: usize,
    free: usize,
}

impl RightAligned {
    pub(crate) const fn new(digit_count: u8) -> Self {
        let len = frame_len(digit_count);
        Self {
            cells: [BLANK; MAX_DIGITS],
            len,
            free: len,
        }
    }

    /// Number of positions written so far
    pub(crate) const fn filled(&self) -> usize {
        self.len - self.free
    }

    /// Place a glyph left of everything written so far
    ///
    /// Returns `false` when the frame is already full.
    pub(crate) fn push(&mut self, glyph: u8) -> bool {
        if self.free == 0 {
            return false;
        }
        self.free -= 1;
        self.cells[self.free] = glyph;
        true
    }

    /// Light the decimal point on a position
    pub(crate) fn add_point(&mut self, position: usize) {
        if position < self.len {
            self.cells[position] |= DOT;
        }
    }

    pub(crate) fn finish(self) -> EncodedFrame {
        EncodedFrame::from_raw(&self.cells[..self.len])
    }
}
