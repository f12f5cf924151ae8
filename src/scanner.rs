//! Digit multiplexing
//!
//! Only one digit position is lit at a time. The scanner cycles through all
//! positions, holding each for the persistence-of-vision interval, so the eye
//! sees the whole frame at once.
//!
//! Every register load is one latch cycle carrying two bytes:
//!
//! 1. latch low
//! 2. digit-select byte, LSB first
//! 3. segment byte, MSB first
//! 4. latch high
//!
//! The differing bit orders follow the wiring of the two registers and must
//! not be unified.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::Clock;
use crate::config::Polarity;
use crate::frame::EncodedFrame;
use crate::glyph::DIGIT_SELECT;
use crate::shift::{BitOrder, ShiftOut};

/// Drives a latch line and a shifter to multiplex frames
pub struct Scanner<L, S, D, T> {
    latch: L,
    shifter: S,
    delay: D,
    clock: T,
    polarity: Polarity,
    pov_interval: Duration,
}

impl<L, S, D, T> Scanner<L, S, D, T>
where
    L: OutputPin<Error = S::Error>,
    S: ShiftOut,
    D: DelayNs,
    T: Clock,
{
    pub const fn new(
        latch: L,
        shifter: S,
        delay: D,
        clock: T,
        polarity: Polarity,
        pov_interval: Duration,
    ) -> Self {
        Self {
            latch,
            shifter,
            delay,
            clock,
            polarity,
            pov_interval,
        }
    }

    /// Multiplex `frame` for `duration`, then blank the display
    ///
    /// Elapsed time is checked before every full scan pass, so a pass that
    /// starts is always completed and a zero duration only blanks.
    ///
    /// Blanking is attempted even when scanning fails; the first error is
    /// returned.
    pub fn render(&mut self, frame: &EncodedFrame, duration: Duration) -> Result<(), S::Error> {
        let scanned = self.scan_until(frame, duration);
        let cleared = self.clear();
        scanned.and(cleared)
    }

    fn scan_until(&mut self, frame: &EncodedFrame, duration: Duration) -> Result<(), S::Error> {
        if frame.is_empty() {
            return Ok(());
        }

        let start = self.clock.now();
        let deadline = start.checked_add(duration).unwrap_or(Instant::MAX);
        while self.clock.now() < deadline {
            self.scan(frame)?;
        }
        Ok(())
    }

    /// Turn every segment and digit off
    ///
    /// Both registers are loaded with zero regardless of polarity.
    pub fn clear(&mut self) -> Result<(), S::Error> {
        #[cfg(feature = "esp32-log")]
        println!("[Scanner.clear] blanking display");

        self.latch.set_low()?;
        self.shifter.shift_out(BitOrder::MsbFirst, 0)?;
        self.shifter.shift_out(BitOrder::MsbFirst, 0)?;
        self.latch.set_high()
    }

    /// Light each position once
    fn scan(&mut self, frame: &EncodedFrame) -> Result<(), S::Error> {
        let hold = u32::try_from(self.pov_interval.as_micros()).unwrap_or(u32::MAX);
        for (&segments, &select) in frame.iter().zip(DIGIT_SELECT.iter()) {
            self.load(self.polarity.digit_select(select), segments)?;
            self.delay.delay_us(hold);
        }
        Ok(())
    }

    fn load(&mut self, select: u8, segments: u8) -> Result<(), S::Error> {
        self.latch.set_low()?;
        self.shifter.shift_out(BitOrder::LsbFirst, select)?;
        self.shifter.shift_out(BitOrder::MsbFirst, segments)?;
        self.latch.set_high()
    }

    /// Give the hardware back
    pub fn release(self) -> (L, S, D, T) {
        (self.latch, self.shifter, self.delay, self.clock)
    }
}
