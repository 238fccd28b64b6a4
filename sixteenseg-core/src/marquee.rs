//! Marquee stepping for scrolling text across a display chain
//!
//! Chains are registered left to right, two digit positions each:
//!
//! ```text
//!         [][]   [][]   [][]   [][]
//! digit:  0  1   2  3   4  5   6  7
//! chain:   #0     #1     #2     #3
//! ```
//!
//! The message enters at the rightmost digit and the visible window
//! slides one digit position left per frame, until the trailing blank
//! padding has swept past digit 0.

use heapless::Vec;

use crate::MAX_CHAINS;

/// Digit positions per module (left and right)
pub const DIGITS_PER_CHAIN: usize = 2;

/// Upper bound on digit positions across a full chain registry
pub const MAX_DIGITS: usize = MAX_CHAINS * DIGITS_PER_CHAIN;

/// One animation frame: the character owed to every digit position
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MarqueeFrame {
    digits: Vec<u8, MAX_DIGITS>,
}

impl MarqueeFrame {
    /// Character at a digit position (blank when out of range)
    pub fn digit(&self, index: usize) -> u8 {
        self.digits.get(index).copied().unwrap_or(b' ')
    }

    /// Left/right character pair for one chain
    pub fn pair(&self, chain: usize) -> (u8, u8) {
        (
            self.digit(chain * DIGITS_PER_CHAIN),
            self.digit(chain * DIGITS_PER_CHAIN + 1),
        )
    }

    /// All digit positions, leftmost first
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}

/// Frame-by-frame scroll state
///
/// Two pad cursors drive the animation: `lead_pad` counts the leading
/// blank digits still owed while the message crawls in from the right,
/// and `tail_pad` marks how far the trailing blanks have swept in once
/// the message is spent. Between the two, a digit shows the message
/// character whose offset keeps every character on exactly one digit
/// per frame as the window slides.
#[derive(Debug, Clone)]
pub struct Marquee<'a> {
    message: &'a [u8],
    num_digits: i32,
    last_digit: i32,
    lead_pad: i32,
    tail_pad: i32,
    read: i32,
    exhausted: bool,
}

impl<'a> Marquee<'a> {
    /// Start a scroll of `message` across `num_digits` digit positions
    ///
    /// An empty message yields no frames at all.
    pub fn new(message: &'a [u8], num_digits: usize) -> Self {
        let num_digits = num_digits.min(MAX_DIGITS) as i32;
        let last_digit = num_digits - 1;

        Self {
            message,
            num_digits,
            last_digit,
            // every digit but the last starts blank
            lead_pad: last_digit - 1,
            // no trailing padding until the message runs out
            tail_pad: last_digit + 1,
            read: 0,
            exhausted: message.is_empty(),
        }
    }

    fn digit_char(&self, digit: i32) -> u8 {
        if self.lead_pad >= digit || self.tail_pad <= digit {
            return b' ';
        }

        let offset = self.read - (self.last_digit - digit) + (self.num_digits - self.tail_pad);
        if (0..self.message.len() as i32).contains(&offset) {
            self.message[offset as usize]
        } else {
            // the window has outrun the end of the message
            b' '
        }
    }
}

impl Iterator for Marquee<'_> {
    type Item = MarqueeFrame;

    fn next(&mut self) -> Option<MarqueeFrame> {
        if self.message.is_empty() || self.num_digits == 0 || self.tail_pad < 0 {
            return None;
        }

        let mut digits = Vec::new();
        for digit in 0..self.num_digits {
            // num_digits is clamped to the Vec capacity
            let _ = digits.push(self.digit_char(digit));
        }

        // retire one digit of leading padding if any remains
        if self.lead_pad >= 0 {
            self.lead_pad -= 1;
        }

        // grow the trailing padding once the message is spent,
        // otherwise advance the read cursor and watch for the end
        if self.exhausted {
            self.tail_pad -= 1;
        } else {
            self.read += 1;
            self.exhausted = self.read as usize >= self.message.len();
        }

        Some(MarqueeFrame { digits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;
    use std::vec::Vec as StdVec;

    fn frames(message: &str, num_digits: usize) -> StdVec<String> {
        Marquee::new(message.as_bytes(), num_digits)
            .map(|f| f.digits().iter().map(|&c| c as char).collect())
            .collect()
    }

    #[test]
    fn test_single_module_scroll() {
        // message enters at the right digit, fills the module, exits
        // left, then the trailing padding sweeps both digits
        assert_eq!(frames("HI", 2), vec![" H", "HI", "I ", "  ", "  "]);
    }

    #[test]
    fn test_empty_message_yields_no_frames() {
        assert_eq!(Marquee::new(b"", 8).count(), 0);
    }

    #[test]
    fn test_zero_digits_yields_no_frames() {
        assert_eq!(Marquee::new(b"HELLO", 0).count(), 0);
    }

    #[test]
    fn test_frame_count() {
        // one frame per character consumed, then one per trailing pad
        // digit plus the final fully-blank frame
        assert_eq!(frames("HELLO", 4).len(), 5 + 4 + 1);
        assert_eq!(frames("A", 2).len(), 1 + 2 + 1);
        // shorter than the window still scrolls fully on and off
        assert_eq!(frames("AB", 8).len(), 2 + 8 + 1);
    }

    #[test]
    fn test_message_enters_rightmost() {
        let all = frames("ABC", 6);
        assert_eq!(all[0], "     A");
        assert_eq!(all[1], "    AB");
        assert_eq!(all[2], "   ABC");
    }

    #[test]
    fn test_window_slides_without_duplication() {
        // every frame shows a contiguous, in-order slice of the message
        for frame in frames("ABCDEF", 4) {
            let visible = frame.trim();
            assert!(
                "ABCDEF".contains(visible),
                "frame {frame:?} is not a contiguous slice"
            );
        }
    }

    #[test]
    fn test_long_message_walks_through_window() {
        let all = frames("ABCDEF", 2);
        assert_eq!(
            all,
            vec![" A", "AB", "BC", "CD", "DE", "EF", "F ", "  ", "  "]
        );
    }

    #[test]
    fn test_last_frame_is_blank() {
        let all = frames("SOME TEXT", 6);
        assert!(all.last().unwrap().chars().all(|c| c == ' '));
    }

    #[test]
    fn test_pair_grouping() {
        let frame = Marquee::new(b"WXYZ", 4).nth(3).unwrap();
        assert_eq!(frame.digits(), b"WXYZ");
        assert_eq!(frame.pair(0), (b'W', b'X'));
        assert_eq!(frame.pair(1), (b'Y', b'Z'));
        // out-of-range chains read as blank
        assert_eq!(frame.pair(5), (b' ', b' '));
    }
}
