//! Display wiring configuration
//!
//! Holds everything about the attached hardware that is fixed for the lifetime
//! of a driver: LED polarity, number of digit positions and scan pacing.

use embassy_time::Duration;

use crate::frame::MAX_DIGITS;

/// Default hold time for a single lit digit.
///
/// With 8 digits this gives a full refresh every 16 ms (~60 Hz).
pub const DEFAULT_POV_INTERVAL: Duration = Duration::from_millis(2);

/// LED wiring convention of the display modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Segments light when driven high; the shared digit terminal is pulled low
    #[default]
    CommonCathode,
    /// Segments light when driven low; the shared digit terminal is pulled high
    CommonAnode,
}

impl Polarity {
    /// Map the usual boolean wiring flag to a polarity
    pub const fn from_common_cathode(common_cathode: bool) -> Self {
        if common_cathode {
            Self::CommonCathode
        } else {
            Self::CommonAnode
        }
    }

    /// Adjust a common-cathode segment byte for this polarity
    pub const fn segments(self, glyph: u8) -> u8 {
        match self {
            Self::CommonCathode => glyph,
            Self::CommonAnode => !glyph,
        }
    }

    /// Adjust a one-hot digit-select byte for this polarity
    ///
    /// The select register drives the shared terminal, so the inversion is the
    /// opposite of [`Polarity::segments`].
    pub const fn digit_select(self, mask: u8) -> u8 {
        match self {
            Self::CommonCathode => !mask,
            Self::CommonAnode => mask,
        }
    }
}

/// Configuration for a shift register display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub polarity: Polarity,
    /// Number of cascaded digit positions, 1 to 8.
    ///
    /// Values above 8 are not supported by the select register; frames are
    /// clamped to 8 positions.
    pub digit_count: u8,
    /// How long each digit stays lit during a scan pass
    pub pov_interval: Duration,
}

impl DisplayConfig {
    pub const fn new(polarity: Polarity, digit_count: u8) -> Self {
        Self {
            polarity,
            digit_count,
            pov_interval: DEFAULT_POV_INTERVAL,
        }
    }

    /// Replace the persistence-of-vision interval
    #[must_use]
    pub const fn with_pov_interval(mut self, pov_interval: Duration) -> Self {
        self.pov_interval = pov_interval;
        self
    }

    /// Number of positions in every frame encoded for this display
    pub const fn frame_len(&self) -> usize {
        frame_len(self.digit_count)
    }
}

pub(crate) const fn frame_len(digit_count: u8) -> usize {
    let len = digit_count as usize;
    if len > MAX_DIGITS { MAX_DIGITS } else { len }
}
