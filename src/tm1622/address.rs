//! Display RAM addressing
//!
//! The controller exposes its display RAM as 4 bit cells behind a 6 bit address.
//! One digit of the glass owns four consecutive cells, so digit `d` nibble `n`
//! lives at `4 * d + n`.

use crate::tm1622::{ADDRESS_SPACE, DIGITS, NIBBLES_PER_DIGIT};

/// Mask applied to every address put on the wire
pub const ADDRESS_MASK: u8 = (ADDRESS_SPACE - 1) as u8;

/// A 6 bit display RAM address
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RamAddress(u8);

impl RamAddress {
    /// First cell of the display RAM
    pub const ZERO: RamAddress = RamAddress(0);

    /// Address of nibble `nibble` of digit `digit`.
    ///
    /// Returns `None` when the digit or the nibble index lies outside the glass.
    pub const fn new(digit: u8, nibble: u8) -> Option<Self> {
        if digit >= DIGITS || nibble >= NIBBLES_PER_DIGIT {
            return None;
        }
        Some(RamAddress(digit * NIBBLES_PER_DIGIT + nibble))
    }

    /// Wrap a raw address, keeping only the low 6 bits
    pub const fn from_raw(addr: u8) -> Self {
        RamAddress(addr & ADDRESS_MASK)
    }

    /// Raw 6 bit value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// `(digit, nibble)` pair this address belongs to
    #[cfg(test)]
    pub(crate) const fn split(self) -> (u8, u8) {
        (self.0 / NIBBLES_PER_DIGIT, self.0 % NIBBLES_PER_DIGIT)
    }
}

impl From<RamAddress> for u8 {
    fn from(addr: RamAddress) -> Self {
        addr.0
    }
}
