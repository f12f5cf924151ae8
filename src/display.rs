#[cfg(feature = "esp32-log")]
use esp_println::println;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::DisplayConfig;
use crate::encoder::{Value, encode_decimal, encode_integer, encode_text};
use crate::frame::EncodedFrame;
use crate::scanner::Scanner;
use crate::shift::{SerialPins, ShiftOut};
use crate::{Clock, SystemClock};

/// Multiplexed 7-segment display behind two cascaded shift registers
///
/// Every print call blocks for its whole duration and leaves the display
/// blank when it returns. Call it repeatedly to keep a value visible.
pub struct ShiftDisplay<L, S, D, T = SystemClock> {
    config: DisplayConfig,
    scanner: Scanner<L, S, D, T>,
}

impl<L, DATA, CLK, D> ShiftDisplay<L, SerialPins<DATA, CLK>, D, SystemClock>
where
    L: OutputPin<Error = DATA::Error>,
    DATA: OutputPin,
    CLK: OutputPin<Error = DATA::Error>,
    D: DelayNs,
{
    /// Create a display driven through three GPIO lines
    ///
    /// The lines must already be configured as outputs.
    pub fn new(latch: L, clock: CLK, data: DATA, config: DisplayConfig, delay: D) -> Self {
        Self::from_parts(latch, SerialPins::new(data, clock), delay, SystemClock, config)
    }
}

impl<L, S, D, T> ShiftDisplay<L, S, D, T>
where
    L: OutputPin<Error = S::Error>,
    S: ShiftOut,
    D: DelayNs,
    T: Clock,
{
    /// Create a display from an arbitrary shifter and time source
    pub fn from_parts(latch: L, shifter: S, delay: D, clock: T, config: DisplayConfig) -> Self {
        Self {
            scanner: Scanner::new(
                latch,
                shifter,
                delay,
                clock,
                config.polarity,
                config.pov_interval,
            ),
            config,
        }
    }

    pub const fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Show an integer right-aligned
    pub fn print_integer(&mut self, value: i32, duration: Duration) -> Result<(), S::Error> {
        let frame = encode_integer(value, self.config.digit_count, self.config.polarity);
        self.show(&frame, duration)
    }

    /// Show a decimal rounded to `places`, right-aligned
    pub fn print_decimal(
        &mut self,
        value: f32,
        places: u8,
        duration: Duration,
    ) -> Result<(), S::Error> {
        let frame = encode_decimal(value, places, self.config.digit_count, self.config.polarity);
        self.show(&frame, duration)
    }

    /// Show text left-aligned
    ///
    /// Accepted characters are `A`-`Z`, `a`-`z`, `0`-`9` and `-`; anything
    /// else is shown as a blank position.
    pub fn print_text(&mut self, text: &str, duration: Duration) -> Result<(), S::Error> {
        let frame = encode_text(text, self.config.digit_count, self.config.polarity);
        self.show(&frame, duration)
    }

    /// Show any printable value
    pub fn print<'a>(
        &mut self,
        value: impl Into<Value<'a>>,
        duration: Duration,
    ) -> Result<(), S::Error> {
        let frame = value
            .into()
            .encode(self.config.digit_count, self.config.polarity);
        self.show(&frame, duration)
    }

    /// Multiplex a prepared frame
    ///
    /// The bytes are sent as is and must already match the display polarity.
    /// Positions beyond the configured digit count are not scanned.
    pub fn show(&mut self, frame: &EncodedFrame, duration: Duration) -> Result<(), S::Error> {
        #[cfg(feature = "esp32-log")]
        println!(
            "[ShiftDisplay.show] showing {:?} for {:?}",
            frame.as_slice(),
            duration
        );

        let frame = frame.truncated(self.config.frame_len());
        self.scanner.render(&frame, duration)
    }

    /// Blank the display immediately
    pub fn clear(&mut self) -> Result<(), S::Error> {
        self.scanner.clear()
    }

    /// Give the hardware back
    pub fn release(self) -> (L, S, D, T) {
        self.scanner.release()
    }
}
