//! Serial byte output into a shift register chain

use embedded_hal::digital::{OutputPin, PinState};

/// Order in which the bits of a byte are clocked out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    LsbFirst,
    MsbFirst,
}

impl BitOrder {
    /// Value of the `step`-th bit to be shifted out
    pub const fn bit(self, value: u8, step: u8) -> bool {
        let shift = match self {
            Self::LsbFirst => step,
            Self::MsbFirst => 7 - step,
        };
        (value >> shift) & 1 == 1
    }
}

/// Clocks a byte into a shift register chain
///
/// Implement this for hardware shifters (SPI, PIO); [`SerialPins`] bit-bangs
/// it over two GPIO lines.
pub trait ShiftOut {
    type Error;

    /// Shift out all 8 bits of `value` in the given order
    fn shift_out(&mut self, order: BitOrder, value: u8) -> Result<(), Self::Error>;
}

/// Bit-banged serial output over a data and a clock line
///
/// Each bit is placed on the data line and latched into the register on the
/// rising clock edge.
pub struct SerialPins<DATA, CLK> {
    data: DATA,
    clock: CLK,
}

impl<DATA, CLK> SerialPins<DATA, CLK> {
    pub const fn new(data: DATA, clock: CLK) -> Self {
        Self { data, clock }
    }

    /// Give the lines back
    pub fn release(self) -> (DATA, CLK) {
        (self.data, self.clock)
    }
}

impl<DATA, CLK> ShiftOut for SerialPins<DATA, CLK>
where
    DATA: OutputPin,
    CLK: OutputPin<Error = DATA::Error>,
{
    type Error = DATA::Error;

    fn shift_out(&mut self, order: BitOrder, value: u8) -> Result<(), Self::Error> {
        for step in 0..8 {
            self.data.set_state(PinState::from(order.bit(value, step)))?;
            self.clock.set_high()?;
            self.clock.set_low()?;
        }
        Ok(())
    }
}
