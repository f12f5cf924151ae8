//! Value to segment encoding
//!
//! Pure functions turning integers, decimals and text into an
//! [`EncodedFrame`]. Nothing here touches hardware.
//!
//! Values that do not fit are truncated rather than rejected: numbers lose
//! their leading digits (and the sign first), text loses its tail.

use core::iter;

use heapless::Vec;

use crate::config::{Polarity, frame_len};
use crate::frame::{EncodedFrame, MAX_DIGITS, RightAligned};
use crate::glyph::{self, BLANK, MINUS};

/// A printable value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Integer(i32),
    /// Decimal rounded to a fixed number of places
    Decimal { value: f32, places: u8 },
    Text(&'a str),
}

impl Value<'_> {
    pub fn encode(&self, digit_count: u8, polarity: Polarity) -> EncodedFrame {
        match *self {
            Self::Integer(value) => encode_integer(value, digit_count, polarity),
            Self::Decimal { value, places } => {
                encode_decimal(value, places, digit_count, polarity)
            }
            Self::Text(text) => encode_text(text, digit_count, polarity),
        }
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<(f32, u8)> for Value<'_> {
    fn from((value, places): (f32, u8)) -> Self {
        Self::Decimal { value, places }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// Encode an integer right-aligned
pub fn encode_integer(value: i32, digit_count: u8, polarity: Polarity) -> EncodedFrame {
    let mut frame = RightAligned::new(digit_count);
    push_magnitude(&mut frame, u64::from(value.unsigned_abs()), 1);
    if value < 0 {
        frame.push(MINUS);
    }
    frame.finish().normalize(polarity)
}

/// Encode a decimal rounded to `places` digits after the point
///
/// The unit digit is always shown. The point is drawn only when at least one
/// position is left for the unit digit.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_decimal(
    value: f32,
    places: u8,
    digit_count: u8,
    polarity: Polarity,
) -> EncodedFrame {
    if places == 0 {
        return encode_integer(libm::roundf(value) as i32, digit_count, polarity);
    }

    let len = frame_len(digit_count);
    let scale = libm::pow(10.0, f64::from(places));
    let places = usize::from(places);
    let scaled = libm::round(libm::fabs(f64::from(value)) * scale) as u64;

    let mut frame = RightAligned::new(digit_count);
    push_magnitude(&mut frame, scaled, places + 1);
    if places < len {
        frame.add_point(len - places - 1);
    }
    if value < 0.0 {
        frame.push(MINUS);
    }
    frame.finish().normalize(polarity)
}

/// Encode text left-aligned, one character per position
pub fn encode_text(text: &str, digit_count: u8, polarity: Polarity) -> EncodedFrame {
    let segments: Vec<u8, MAX_DIGITS> = text
        .chars()
        .map(glyph::for_char)
        .chain(iter::repeat(BLANK))
        .take(frame_len(digit_count))
        .collect();
    EncodedFrame::from(segments).normalize(polarity)
}

/// Push decimal digits of `magnitude`, lowest first
///
/// Stops once the number is exhausted and at least `min_digits` are placed, or
/// when the frame is full. Zero always produces one digit.
#[allow(clippy::cast_possible_truncation)]
fn push_magnitude(frame: &mut RightAligned, mut magnitude: u64, min_digits: usize) {
    loop {
        if !frame.push(glyph::digit((magnitude % 10) as u8)) {
            return;
        }
        magnitude /= 10;
        if magnitude == 0 && frame.filled() >= min_digits {
            return;
        }
    }
}
