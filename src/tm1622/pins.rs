//! Pin definitions for the TM1622 segment LCD
//!
//! GPIO assignments on the ESP32-S3 board. The firmware binary takes the matching
//! `pins.gpioN` peripherals, keep the two in sync.

/// Pin configuration constants for the TM1622 display
pub struct Pins;

impl Pins {
    /// Chip Select, active low
    pub const CS: u8 = 15;
    /// Write clock, data is latched on the rising edge
    pub const WR: u8 = 16;
    /// Serial data
    pub const DATA: u8 = 17;
}
