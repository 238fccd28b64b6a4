//! Segment frame packing and wire-level bit ordering
//!
//! One module latches all 32 segment bits (two 16-segment digits) from
//! a single 36-bit serial write. The 32-bit frame is not two contiguous
//! halves: the left digit occupies bits 8-23, while the right digit's
//! low byte stays in bits 0-7 and its high byte sits in bits 24-31.
//! That split is how the boards are wired, so it must be reproduced
//! exactly rather than tidied up.

use crate::font::char_mask;

/// Bits transmitted per module update
///
/// Enable bit, one spacer, 32 payload bits, two trailing spacers. The
/// spacer positions drive physically disconnected conductors and are
/// always low.
pub const WIRE_FRAME_BITS: usize = 36;

/// Clock pulse width for one bit, in microseconds
pub const CLOCK_PULSE_US: u32 = 10;

/// Pack two digit masks into one 32-bit segment frame
pub fn pack_masks(left: u16, right: u16) -> u32 {
    // left digit fills bits 8-23
    let left = (left as u32) << 8;

    // right digit is split: low byte stays put, high byte moves to the
    // top of the frame
    let right_low = (right as u32) & 0x00ff;
    let right_high = ((right as u32) & 0xff00) << 16;

    right_low | left | right_high
}

/// Left digit mask of a packed frame (bits 8-23)
pub fn left_mask(frame: u32) -> u16 {
    ((frame >> 8) & 0xffff) as u16
}

/// Right digit mask of a packed frame (bits 0-7 and 24-31)
pub fn right_mask(frame: u32) -> u16 {
    ((frame & 0x00ff) | ((frame >> 16) & 0xff00)) as u16
}

/// Pack two characters into the frame a module expects
pub fn compose_frame(left: u8, right: u8) -> u32 {
    pack_masks(char_mask(left), char_mask(right))
}

/// Expand a segment frame into the 36 bit levels sent on the wire
///
/// Position 0 is the enable bit (always high); positions 1, 34 and 35
/// stay low. The payload goes out least-significant bit first.
pub fn wire_bits(frame: u32) -> [bool; WIRE_FRAME_BITS] {
    let mut bits = [false; WIRE_FRAME_BITS];
    bits[0] = true;
    for i in 0..32 {
        bits[2 + i] = (frame >> i) & 1 != 0;
    }
    bits
}
