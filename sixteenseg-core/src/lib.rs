//! Board-agnostic logic for chained 16-segment display modules
//!
//! This crate contains everything about the displays that can be
//! computed without touching a pin:
//!
//! - 16-segment font table and character lookup
//! - Segment frame packing (two digits into one 32-bit frame)
//! - Wire-level bit ordering for the two-wire serial protocol
//! - Marquee stepping for scrolling text

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod font;
pub mod frame;
pub mod marquee;

pub use font::{char_mask, FIRST_CHAR, LAST_CHAR};
pub use frame::{compose_frame, pack_masks, wire_bits, CLOCK_PULSE_US, WIRE_FRAME_BITS};
pub use marquee::{Marquee, MarqueeFrame, DIGITS_PER_CHAIN, MAX_DIGITS};

/// Maximum number of module chains one driver instance will manage
///
/// The registry is a fixed-capacity collection; registering past this
/// limit is rejected, never grown.
pub const MAX_CHAINS: usize = 8;
