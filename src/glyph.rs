//! Segment lookup tables
//!
//! Every pattern is stored in the common-cathode convention, one bit per
//! segment:
//!
//! ```text
//!  bit:  7 6 5 4 3 2 1 0
//!  seg:  a b c d e f g dp
//!
//!    aaa
//!   f   b
//!    ggg
//!   e   c
//!    ddd  dp
//! ```

/// Segment pattern with nothing lit
pub const BLANK: u8 = 0b0000_0000;

/// Middle bar only
pub const MINUS: u8 = 0b0000_0010;

/// Decimal point bit, ORed onto a glyph
pub const DOT: u8 = 0b0000_0001;

/// Digits `0`-`9`
pub const DIGITS: [u8; 10] = [
    0b1111_1100, // 0
    0b0110_0000, // 1
    0b1101_1010, // 2
    0b1111_0010, // 3
    0b0110_0110, // 4
    0b1011_0110, // 5
    0b1011_1110, // 6
    0b1110_0000, // 7
    0b1111_1110, // 8
    0b1111_0110, // 9
];

/// Letters `A`-`Z`, some necessarily approximated
pub const LETTERS: [u8; 26] = [
    0b1110_1110, // A
    0b0011_1110, // b
    0b1001_1100, // C
    0b0111_1010, // d
    0b1001_1110, // E
    0b1000_1110, // F
    0b1011_1100, // G
    0b0110_1110, // H
    0b0000_1100, // I
    0b0111_1000, // J
    0b1010_1110, // K
    0b0001_1100, // L
    0b1110_1100, // M
    0b0010_1010, // n
    0b1111_1100, // O
    0b1100_1110, // P
    0b1110_0110, // q
    0b0000_1010, // r
    0b1011_0110, // S
    0b0001_1110, // t
    0b0111_1100, // U
    0b0011_1000, // v
    0b0101_0100, // W
    0b0110_1110, // X
    0b0111_0110, // y
    0b1101_1010, // Z
];

/// One-hot masks selecting a digit position in the select register
pub const DIGIT_SELECT: [u8; 8] = [
    0b1000_0000,
    0b0100_0000,
    0b0010_0000,
    0b0001_0000,
    0b0000_1000,
    0b0000_0100,
    0b0000_0010,
    0b0000_0001,
];

/// Pattern for a single decimal digit
///
/// Only the last decimal digit of `value` is used.
pub const fn digit(value: u8) -> u8 {
    DIGITS[(value % 10) as usize]
}

/// Pattern for a text character
///
/// Letters are case-insensitive. Characters without a pattern render blank.
pub const fn for_char(c: char) -> u8 {
    match c {
        'A'..='Z' => LETTERS[c as usize - 'A' as usize],
        'a'..='z' => LETTERS[c as usize - 'a' as usize],
        '0'..='9' => DIGITS[c as usize - '0' as usize],
        '-' => MINUS,
        _ => BLANK,
    }
}
