//! Bit-banged two-wire driver for chained 16-segment display modules
//!
//! Each module hangs off its own data+clock pin pair (a "chain") and
//! latches 32 segment bits, two 16-segment digits, from one 36-bit
//! serial write. The protocol is send-only: nothing is ever read back,
//! and a disconnected module is simply invisible.
//!
//! Pure framing and animation logic lives in `sixteenseg-core`; this
//! crate owns the pins and the timing. Pins and delays go through the
//! `embedded-hal` 1.0 traits, so the driver runs on anything that can
//! wiggle two GPIOs.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

mod bus;

pub use bus::{Error, SixteenSeg};
pub use sixteenseg_core::MAX_CHAINS;
