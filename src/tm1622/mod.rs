//! TM1622 / HT1622 16-segment LCD Driver
//!
//! Used with a 10 digit, 16 segment glass wired in 4-wire serial mode (RD tied high).
//!
//! This driver is loosely modeled after the
//! [LCD_HT1622_16SegLcd](https://github.com/MartyMacGyver/LCD_HT1622_16SegLcd) Arduino
//! driver but built around `embedded-hal` pins and an injected delay.
//!
//! ### Wiring
//!
//! ```txt
//!  TM1622   ESP32-S3
//!  CS    -> Pins::CS    (active low)
//!  WR    -> Pins::WR    (data latched on rising edge)
//!  DATA  -> Pins::DATA
//!  RD    -> not used, tie high
//! ```
//!
//! ### Usage
//!
//! 1. configure the three lines as push-pull outputs
//! 1. create the handle with [`driver::Tm1622::new`] and call [`driver::Tm1622::init`]
//! 1. draw text with [`driver::Tm1622::put_string`] or poke nibbles with
//!    [`driver::Tm1622::write_nibble`]
//!
//! Every operation blocks the calling thread until the last bit has been clocked out.
//! The handle is not safe to share between threads without external locking.

pub mod address;
pub mod cmd;
pub mod driver;
pub mod font;
pub mod frame;
pub mod interface;
pub mod pins;

#[cfg(test)]
mod sim;

/// Number of digits on the glass
pub const DIGITS: u8 = 10;

/// Display RAM nibbles backing one 16 segment digit
pub const NIBBLES_PER_DIGIT: u8 = 4;

/// Display RAM nibbles used by the glass, addresses `0..RAM_NIBBLES`
pub const RAM_NIBBLES: usize = DIGITS as usize * NIBBLES_PER_DIGIT as usize;

/// Size of the controller's 6 bit address space
pub const ADDRESS_SPACE: usize = 64;

/// Minimum write-clock high time in microseconds.
///
/// The controller needs roughly 400 ns of WR high time, one microsecond leaves margin.
pub const WR_PULSE_US: u32 = 1;
