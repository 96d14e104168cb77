//! Test double for the controller
//!
//! Three recording pins share one [`Controller`] that samples DATA on every WR rising
//! edge while CS is low and decodes the bits into frames when CS goes high, the way
//! the real chip does.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use crate::tm1622::{font, ADDRESS_SPACE, NIBBLES_PER_DIGIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Cs,
    Wr,
    Data,
}

/// A decoded transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Command(u8),
    Write { addr: u8, data: Vec<u8> },
    /// Tag or length did not match any known frame
    Garbage(Vec<bool>),
}

/// One CS low/high bracket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub bits: usize,
    pub decoded: Decoded,
}

#[derive(Debug)]
pub struct Controller {
    cs: bool,
    wr: bool,
    data: bool,
    shift: Vec<bool>,
    /// Pin writes seen on any line
    pub pin_writes: usize,
    /// WR rising edges seen with CS high
    pub stray_clocks: usize,
    pub transactions: Vec<Transaction>,
    pub ram: [u8; ADDRESS_SPACE],
    fail: Option<Line>,
}

impl Controller {
    fn new() -> Self {
        Controller {
            cs: true,
            wr: true,
            data: false,
            shift: Vec::new(),
            pin_writes: 0,
            stray_clocks: 0,
            transactions: Vec::new(),
            // Power-on RAM content is undefined
            ram: [0xA; ADDRESS_SPACE],
            fail: None,
        }
    }

    fn drive(&mut self, line: Line, level: bool) -> Result<(), ErrorKind> {
        if self.fail == Some(line) {
            return Err(ErrorKind::Other);
        }
        self.pin_writes += 1;
        match line {
            Line::Cs => {
                if self.cs && !level {
                    self.shift.clear();
                } else if !self.cs && level {
                    self.latch();
                }
                self.cs = level;
            }
            Line::Wr => {
                if !self.wr && level {
                    if self.cs {
                        self.stray_clocks += 1;
                    } else {
                        self.shift.push(self.data);
                    }
                }
                self.wr = level;
            }
            Line::Data => self.data = level,
        }
        Ok(())
    }

    fn take(bits: &[bool], from: usize, count: usize) -> u8 {
        bits[from..from + count]
            .iter()
            .fold(0u8, |acc, &b| (acc << 1) | u8::from(b))
    }

    fn latch(&mut self) {
        let bits = std::mem::take(&mut self.shift);
        let decoded = match bits.len() {
            11 if Self::take(&bits, 0, 3) == 0b100 => {
                Decoded::Command(Self::take(&bits, 3, 8))
            }
            n if n >= 9 && Self::take(&bits, 0, 3) == 0b101 && (n - 9) % 4 == 0 => {
                let addr = Self::take(&bits, 3, 6);
                let data: Vec<u8> = (9..n).step_by(4).map(|i| Self::take(&bits, i, 4)).collect();
                for (offset, nibble) in data.iter().enumerate() {
                    self.ram[(addr as usize + offset) % ADDRESS_SPACE] = *nibble;
                }
                Decoded::Write { addr, data }
            }
            _ => Decoded::Garbage(bits.clone()),
        };
        self.transactions.push(Transaction {
            bits: bits.len(),
            decoded,
        });
    }

    /// Current line levels as `(cs, wr, data)`
    pub fn levels(&self) -> (bool, bool, bool) {
        (self.cs, self.wr, self.data)
    }

    /// Segment mask currently stored for `digit`
    pub fn digit_mask(&self, digit: u8) -> u16 {
        let base = (digit * NIBBLES_PER_DIGIT) as usize;
        let mut nibbles = [0u8; NIBBLES_PER_DIGIT as usize];
        nibbles.copy_from_slice(&self.ram[base..base + NIBBLES_PER_DIGIT as usize]);
        font::join(nibbles)
    }

    pub fn commands(&self) -> Vec<u8> {
        self.transactions
            .iter()
            .filter_map(|t| match t.decoded {
                Decoded::Command(code) => Some(code),
                _ => None,
            })
            .collect()
    }
}

/// Shared handle to the simulated controller
#[derive(Clone)]
pub struct Bus(Rc<RefCell<Controller>>);

impl Bus {
    pub fn new() -> Self {
        Bus(Rc::new(RefCell::new(Controller::new())))
    }

    pub fn pins(&self) -> (SimPin, SimPin, SimPin) {
        (self.pin(Line::Cs), self.pin(Line::Wr), self.pin(Line::Data))
    }

    fn pin(&self, line: Line) -> SimPin {
        SimPin {
            line,
            bus: self.clone(),
        }
    }

    /// Make every write to `line` fail from now on
    pub fn fail(&self, line: Line) {
        self.0.borrow_mut().fail = Some(line);
    }

    pub fn get(&self) -> std::cell::Ref<'_, Controller> {
        self.0.borrow()
    }

    /// Forget recorded transactions, keeps RAM
    pub fn reset_log(&self) {
        let mut ctrl = self.0.borrow_mut();
        ctrl.transactions.clear();
        ctrl.pin_writes = 0;
        ctrl.stray_clocks = 0;
    }
}

pub struct SimPin {
    line: Line,
    bus: Bus,
}

impl ErrorType for SimPin {
    type Error = ErrorKind;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bus.0.borrow_mut().drive(self.line, false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bus.0.borrow_mut().drive(self.line, true)
    }
}
