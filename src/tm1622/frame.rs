//! Frame encoding
//!
//! ```txt
//! COMMAND          [1 0 0] [c7 .. c0]                  11 bits
//! WRITE            [1 0 1] [a5 .. a0] [d3 .. d0]       13 bits
//! WRITE (burst)    [1 0 1] [a5 .. a0] [d3 .. d0] x N   9 + 4N bits
//! ```
//!
//! All fields go out MSB first. Values are masked to their field width, never rejected.

use crate::tm1622::address::RamAddress;

/// Type tag of a COMMAND transaction
pub const TAG_COMMAND: u8 = 0b100;
/// Type tag of a WRITE transaction
pub const TAG_WRITE: u8 = 0b101;

/// Width of the type tag
pub const TAG_BITS: u8 = 3;
/// Width of a command code
pub const COMMAND_BITS: u8 = 8;
/// Width of a display RAM address
pub const ADDRESS_BITS: u8 = 6;
/// Width of one payload nibble
pub const NIBBLE_BITS: u8 = 4;

/// Mask applied to every payload nibble
pub const NIBBLE_MASK: u8 = 0x0F;

/// One transaction on the wire, bracketed by a single chip-select assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame<'a> {
    /// Command code
    Command(u8),
    /// One nibble at one address
    Write { addr: RamAddress, data: u8 },
    /// Consecutive nibbles, the controller increments its address per nibble
    Burst { addr: RamAddress, data: &'a [u8] },
}

impl Frame<'_> {
    /// Type tag sent first
    pub const fn tag(&self) -> u8 {
        match self {
            Frame::Command(_) => TAG_COMMAND,
            Frame::Write { .. } | Frame::Burst { .. } => TAG_WRITE,
        }
    }

    /// Number of write-clock pulses the frame takes
    pub fn bit_len(&self) -> usize {
        let tag = TAG_BITS as usize;
        match self {
            Frame::Command(_) => tag + COMMAND_BITS as usize,
            Frame::Write { .. } => tag + ADDRESS_BITS as usize + NIBBLE_BITS as usize,
            Frame::Burst { data, .. } => {
                tag + ADDRESS_BITS as usize + data.len() * NIBBLE_BITS as usize
            }
        }
    }

    /// Feed the frame's fields to `emit` as `(value, bit_count)`, in wire order
    pub fn encode<E>(&self, mut emit: impl FnMut(u32, u8) -> Result<(), E>) -> Result<(), E> {
        emit(u32::from(self.tag()), TAG_BITS)?;
        match *self {
            Frame::Command(code) => emit(u32::from(code), COMMAND_BITS),
            Frame::Write { addr, data } => {
                emit(u32::from(addr.value()), ADDRESS_BITS)?;
                emit(u32::from(data & NIBBLE_MASK), NIBBLE_BITS)
            }
            Frame::Burst { addr, data } => {
                emit(u32::from(addr.value()), ADDRESS_BITS)?;
                for nibble in data {
                    emit(u32::from(nibble & NIBBLE_MASK), NIBBLE_BITS)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    fn bits(frame: &Frame) -> Vec<u8> {
        let mut out = Vec::new();
        frame
            .encode(|value, count| {
                for i in (0..count).rev() {
                    out.push(((value >> i) & 1) as u8);
                }
                Ok::<(), Infallible>(())
            })
            .unwrap();
        out
    }

    #[test]
    fn command_layout() {
        let frame = Frame::Command(0xA0);
        assert_eq!(bits(&frame), [1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0]);
        assert_eq!(frame.bit_len(), 11);
    }

    #[test]
    fn write_layout() {
        let frame = Frame::Write {
            addr: RamAddress::from_raw(0x27),
            data: 0x9,
        };
        assert_eq!(bits(&frame), [1, 0, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1]);
        assert_eq!(frame.bit_len(), 13);
    }

    #[test]
    fn payload_is_masked() {
        let masked = Frame::Write {
            addr: RamAddress::from_raw(0xC1),
            data: 0xF3,
        };
        let plain = Frame::Write {
            addr: RamAddress::from_raw(0x01),
            data: 0x03,
        };
        assert_eq!(bits(&masked), bits(&plain));
    }

    #[test]
    fn burst_sends_tag_and_address_once() {
        let data = [0x1, 0x2, 0x3];
        let frame = Frame::Burst {
            addr: RamAddress::from_raw(4),
            data: &data,
        };
        assert_eq!(
            bits(&frame),
            [1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 1]
        );
        assert_eq!(frame.bit_len(), 9 + 4 * data.len());
    }

    #[test]
    fn empty_burst_is_tag_and_address() {
        let frame = Frame::Burst {
            addr: RamAddress::ZERO,
            data: &[],
        };
        assert_eq!(bits(&frame).len(), 9);
        assert_eq!(frame.bit_len(), 9);
    }
}
