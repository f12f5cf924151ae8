#![no_std]

pub mod config;
pub mod display;
pub mod encoder;
pub mod frame;
pub mod glyph;
pub mod scanner;
pub mod shift;

pub use config::{DEFAULT_POV_INTERVAL, DisplayConfig, Polarity};
pub use display::ShiftDisplay;
pub use encoder::{Value, encode_decimal, encode_integer, encode_text};
pub use frame::{EncodedFrame, MAX_DIGITS};
pub use scanner::Scanner;
pub use shift::{BitOrder, SerialPins, ShiftOut};

pub use embassy_time::{Duration, Instant};

/// Monotonic time source
///
/// Used to bound how long a frame is multiplexed.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by the global embassy time driver
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
