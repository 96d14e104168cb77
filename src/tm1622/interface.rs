//! Bit-banged 4-wire serial interface
use crate::tm1622::{frame::Frame, WR_PULSE_US};
use display_interface::DisplayError;
use embedded_hal::{delay::DelayNs, digital::OutputPin};

/// The three write lines of the controller and the delay used to pace them
pub struct DisplayInterface<CS, WR, DATA, DELAY> {
    /// Chip select, low while a transaction is in progress
    cs: CS,
    /// Write clock, the controller samples DATA on the rising edge
    wr: WR,
    /// Serial data
    data: DATA,
    /// Busy-wait delay, must not sleep
    pub(crate) delay: DELAY,
}

impl<CS, WR, DATA, DELAY> DisplayInterface<CS, WR, DATA, DELAY> {
    /// Create the interface, no line is touched
    pub fn new(cs: CS, wr: WR, data: DATA, delay: DELAY) -> Self {
        DisplayInterface {
            cs,
            wr,
            data,
            delay,
        }
    }

    /// Give back the lines and the delay
    pub fn release(self) -> (CS, WR, DATA, DELAY) {
        (self.cs, self.wr, self.data, self.delay)
    }
}

impl<CS, WR, DATA, DELAY> DisplayInterface<CS, WR, DATA, DELAY>
where
    CS: OutputPin,
    WR: OutputPin,
    DATA: OutputPin,
    DELAY: DelayNs,
{
    /// Drive the idle levels: CS high, WR high, DATA low
    pub(crate) fn idle(&mut self) -> Result<(), DisplayError> {
        self.cs.set_high().map_err(|_| DisplayError::CSError)?;
        self.wr.set_high().map_err(|_| DisplayError::BusWriteError)?;
        self.data.set_low().map_err(|_| DisplayError::BusWriteError)
    }

    /// Clock out one bit: WR low, DATA to `level`, WR high, then hold
    pub fn emit_bit(&mut self, level: bool) -> Result<(), DisplayError> {
        self.wr.set_low().map_err(|_| DisplayError::BusWriteError)?;
        self.data
            .set_state(level.into())
            .map_err(|_| DisplayError::BusWriteError)?;
        self.wr.set_high().map_err(|_| DisplayError::BusWriteError)?;
        self.delay.delay_us(WR_PULSE_US);
        Ok(())
    }

    /// Clock out the low `count` bits of `value`, most significant first
    ///
    /// Positions above bit 31 go out as zeros.
    pub fn emit_word(&mut self, value: u32, count: u8) -> Result<(), DisplayError> {
        for i in (0..u32::from(count)).rev() {
            let bit = value.checked_shr(i).unwrap_or(0) & 1;
            self.emit_bit(bit == 1)?;
        }
        Ok(())
    }

    /// Send one frame between a single CS low/high pair
    pub fn transaction(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        log::trace!("TM1622 {:?} ({} bits)", frame, frame.bit_len());

        self.cs.set_low().map_err(|_| DisplayError::CSError)?;
        let sent = frame.encode(|value, count| self.emit_word(value, count));

        // Release CS even when a bit failed so the controller drops the partial frame
        let released = self.cs.set_high().map_err(|_| DisplayError::CSError);
        sent.and(released)
    }
}
