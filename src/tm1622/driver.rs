//! TM1622 Display Driver Implementation
//!
//! High level operations on top of the bit-banged [`DisplayInterface`].
//!
//! ### Initialization
//! - `new()` - Wrap the lines, nothing is sent
//! - `init()` - Idle levels, power-on command sequence and a full clear
//! - `new_initialized()` - Both of the above
//!
//! ### Raw Access
//! - `send_command()` / `command()` - One COMMAND transaction
//! - `write4()` - One nibble at a raw address
//! - `write_burst()` - Consecutive nibbles from a raw start address
//!
//! ### Display RAM
//! - `write_nibble()` - One nibble of one digit, bounds checked
//! - `set_all()` / `clear()` - Every segment on or off
//!
//! ### Text
//! - `put_char()` - One glyph at one digit
//! - `put_string()` - Left aligned text, remaining digits blanked
//!
//! ## Argument Checking
//!
//! Raw access masks its arguments to the field width (command `0xFF`, address
//! `0x3F`, payload `0x0F`). Digit and nibble indices are checked and rejected with
//! `DisplayError::OutOfBoundsError` before chip select is asserted, so a rejected
//! call never leaves a partial write behind.
//!
//! The controller is write only. Nothing that was sent is read back or acknowledged.

pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::tm1622::address::RamAddress;
use crate::tm1622::cmd::{Command, INIT_SEQUENCE};
use crate::tm1622::font::{self, BLANK};
use crate::tm1622::frame::Frame;
use crate::tm1622::interface::DisplayInterface;
use crate::tm1622::{DIGITS, NIBBLES_PER_DIGIT, RAM_NIBBLES};

/// TM1622 Segment LCD Driver
///
/// ## Type Parameters
///
/// - `CS` - Chip select output pin
/// - `WR` - Write clock output pin
/// - `DATA` - Data output pin
/// - `DELAY` - Busy-wait delay for the write-clock timing
pub struct Tm1622<CS, WR, DATA, DELAY> {
    /// The display interface
    pub interface: DisplayInterface<CS, WR, DATA, DELAY>,
}

impl<CS, WR, DATA, DELAY> Tm1622<CS, WR, DATA, DELAY> {
    /// Create the driver without talking to the controller
    pub fn new(cs: CS, wr: WR, data: DATA, delay: DELAY) -> Self {
        Tm1622 {
            interface: DisplayInterface::new(cs, wr, data, delay),
        }
    }

    /// Create a new instance from an existing interface without initialization
    pub fn from_interface(interface: DisplayInterface<CS, WR, DATA, DELAY>) -> Self {
        Tm1622 { interface }
    }

    /// Give back the lines and the delay
    pub fn release(self) -> (CS, WR, DATA, DELAY) {
        self.interface.release()
    }
}

impl<CS, WR, DATA, DELAY> Tm1622<CS, WR, DATA, DELAY>
where
    CS: OutputPin,
    WR: OutputPin,
    DATA: OutputPin,
    DELAY: DelayNs,
{
    /// Create and initialize the display driver
    pub fn new_initialized(cs: CS, wr: WR, data: DATA, delay: DELAY) -> Result<Self, DisplayError> {
        let mut tm1622 = Self::new(cs, wr, data, delay);
        tm1622.init()?;
        Ok(tm1622)
    }

    /// Bring the controller out of its power-on state and blank the glass
    ///
    /// Fails without sending anything when the idle levels cannot be driven.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        log::info!("Initializing TM1622 segment LCD");

        if let Err(e) = self.interface.idle() {
            log::error!("Could not drive TM1622 idle levels: {:?}", e);
            return Err(e);
        }

        for command in INIT_SEQUENCE {
            log::debug!("TM1622 command {}", command);
            self.command(command)?;
        }

        self.clear()
    }

    /// Send one raw command code
    pub fn send_command(&mut self, code: u8) -> Result<(), DisplayError> {
        self.interface.transaction(&Frame::Command(code))
    }

    /// Send one known command
    pub fn command(&mut self, command: Command) -> Result<(), DisplayError> {
        self.send_command(command.code())
    }

    /// Switch the bias generator and the oscillator off, `init()` wakes the controller again
    pub fn power_down(&mut self) -> Result<(), DisplayError> {
        log::info!("Powering down TM1622");
        self.command(Command::LcdOff)?;
        self.command(Command::SystemDisable)
    }

    /// Write one nibble at a raw address, both masked to their field width
    pub fn write4(&mut self, addr: u8, value: u8) -> Result<(), DisplayError> {
        self.interface.transaction(&Frame::Write {
            addr: RamAddress::from_raw(addr),
            data: value,
        })
    }

    /// Write one nibble of one digit
    pub fn write_nibble(&mut self, digit: u8, nibble: u8, value: u8) -> Result<(), DisplayError> {
        let addr = Self::address(digit, nibble)?;
        self.interface.transaction(&Frame::Write { addr, data: value })
    }

    /// Write consecutive nibbles in a single transaction
    ///
    /// The controller advances its address after each nibble, the driver does not check
    /// whether the run stays inside the glass.
    pub fn write_burst(&mut self, start_addr: u8, nibbles: &[u8]) -> Result<(), DisplayError> {
        self.interface.transaction(&Frame::Burst {
            addr: RamAddress::from_raw(start_addr),
            data: nibbles,
        })
    }

    /// Turn every segment on or off
    pub fn set_all(&mut self, on: bool) -> Result<(), DisplayError> {
        log::debug!("Setting all segments {}", if on { "on" } else { "off" });
        let buffer = [if on { 0x0F } else { 0x00 }; RAM_NIBBLES];
        self.interface.transaction(&Frame::Burst {
            addr: RamAddress::ZERO,
            data: &buffer,
        })
    }

    /// Turn every segment off
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.set_all(false)
    }

    /// Draw `c` at `digit`, 0 is the left-most digit
    ///
    /// Characters without a glyph are drawn blank.
    pub fn put_char(&mut self, digit: u8, c: char) -> Result<(), DisplayError> {
        Self::address(digit, 0)?;
        self.put_mask(digit, font::glyph(c))
    }

    /// Draw `text` from digit 0, blank the digits it does not reach
    ///
    /// Text longer than the glass is cut off.
    pub fn put_string(&mut self, text: &str) -> Result<(), DisplayError> {
        log::debug!("Writing {:?} to TM1622", text);
        let mut chars = text.chars();
        for digit in 0..DIGITS {
            let mask = chars.next().map_or(BLANK, font::glyph);
            self.put_mask(digit, mask)?;
        }
        Ok(())
    }

    fn put_mask(&mut self, digit: u8, mask: u16) -> Result<(), DisplayError> {
        for (nibble, value) in (0..NIBBLES_PER_DIGIT).zip(font::nibbles(mask)) {
            self.write_nibble(digit, nibble, value)?;
        }
        Ok(())
    }

    fn address(digit: u8, nibble: u8) -> Result<RamAddress, DisplayError> {
        RamAddress::new(digit, nibble).ok_or_else(|| {
            log::warn!(
                "TM1622 cell out of range: digit {} nibble {} (glass has {} digits)",
                digit,
                nibble,
                DIGITS
            );
            DisplayError::OutOfBoundsError
        })
    }
}
