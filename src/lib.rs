//! Driver for the TM1622/HT1622 16-segment LCD controller
//!
//! The controller is driven over three GPIO lines (chip-select, write-clock and data)
//! with a bit-banged, write-only serial protocol. See [`tm1622`] for the details.
#![cfg_attr(not(test), no_std)]

pub mod tm1622;

pub use crate::tm1622::cmd::{Cmd, Command};
pub use crate::tm1622::driver::{DisplayError, Tm1622};
pub use crate::tm1622::pins::Pins;
