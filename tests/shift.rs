mod tests {
    use std::cell::{Cell, RefCell};
    use std::convert::Infallible;

    use embedded_hal::digital::{ErrorType, OutputPin};
    use shift_display::{BitOrder, SerialPins, ShiftOut};

    /// Samples the data line on every rising clock edge
    #[derive(Default)]
    struct Wire {
        data: Cell<bool>,
        clock: Cell<bool>,
        sampled: RefCell<Vec<bool>>,
    }

    struct DataPin<'a>(&'a Wire);
    struct ClockPin<'a>(&'a Wire);

    impl ErrorType for DataPin<'_> {
        type Error = Infallible;
    }

    impl ErrorType for ClockPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for DataPin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.data.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.data.set(true);
            Ok(())
        }
    }

    impl OutputPin for ClockPin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.clock.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            if !self.0.clock.get() {
                self.0.sampled.borrow_mut().push(self.0.data.get());
            }
            self.0.clock.set(true);
            Ok(())
        }
    }

    fn shift(order: BitOrder, value: u8) -> Vec<bool> {
        let wire = Wire::default();
        let mut pins = SerialPins::new(DataPin(&wire), ClockPin(&wire));
        pins.shift_out(order, value).unwrap();
        assert!(!wire.clock.get(), "clock must idle low");
        wire.sampled.take()
    }

    #[test]
    fn test_msb_first() {
        assert_eq!(
            shift(BitOrder::MsbFirst, 0b1100_0001),
            [true, true, false, false, false, false, false, true]
        );
    }

    #[test]
    fn test_lsb_first() {
        assert_eq!(
            shift(BitOrder::LsbFirst, 0b1100_0001),
            [true, false, false, false, false, false, true, true]
        );
    }

    #[test]
    fn test_bit_order_bit() {
        assert!(BitOrder::MsbFirst.bit(0b1000_0000, 0));
        assert!(!BitOrder::LsbFirst.bit(0b1000_0000, 0));
        assert!(BitOrder::LsbFirst.bit(0b1000_0000, 7));
    }
}
