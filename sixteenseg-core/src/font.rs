//! 16-segment font table and character lookup
//!
//! The table covers the contiguous printable ASCII range `' '..='_'`.
//! Lower-case letters render with the upper-case glyphs; anything else
//! outside the range renders blank rather than erroring.

/// Segment bit assignments for one 16-segment digit
///
/// The horizontal bars are split into left/right halves (A1/A2 top,
/// G1/G2 middle, D1/D2 bottom). H, J, K and M are the corner diagonals,
/// I and L the center verticals. Bit positions match the module's
/// shift-register wiring.
pub mod seg {
    /// Top bar, left half
    pub const A1: u16 = 1 << 0;
    /// Top bar, right half
    pub const A2: u16 = 1 << 1;
    /// Upper right vertical
    pub const B: u16 = 1 << 2;
    /// Lower right vertical
    pub const C: u16 = 1 << 3;
    /// Bottom bar, left half
    pub const D1: u16 = 1 << 4;
    /// Bottom bar, right half
    pub const D2: u16 = 1 << 5;
    /// Lower left vertical
    pub const E: u16 = 1 << 6;
    /// Upper left vertical
    pub const F: u16 = 1 << 7;
    /// Middle bar, left half
    pub const G1: u16 = 1 << 8;
    /// Middle bar, right half
    pub const G2: u16 = 1 << 9;
    /// Upper left diagonal
    pub const H: u16 = 1 << 10;
    /// Upper center vertical
    pub const I: u16 = 1 << 11;
    /// Upper right diagonal
    pub const J: u16 = 1 << 12;
    /// Lower left diagonal
    pub const K: u16 = 1 << 13;
    /// Lower center vertical
    pub const L: u16 = 1 << 14;
    /// Lower right diagonal
    pub const M: u16 = 1 << 15;
}

use seg::*;

/// First character covered by the font table
pub const FIRST_CHAR: u8 = b' ';

/// Last character covered by the font table
pub const LAST_CHAR: u8 = b'_';

/// Number of glyphs in the font table
pub const FONT_SIZE: usize = (LAST_CHAR - FIRST_CHAR + 1) as usize;

/// Glyph masks for `' '..='_'`, indexed by `c - FIRST_CHAR`
pub const FONT: [u16; FONT_SIZE] = [
    0,                                                 // ' '
    B | C,                                             // '!'
    I | B,                                             // '"'
    B | C | D1 | D2 | G1 | G2 | I | L,                 // '#'
    A1 | A2 | C | D1 | D2 | F | G1 | G2 | I | L,       // '$'
    A1 | F | G1 | G2 | C | D2 | J | K,                 // '%'
    A1 | F | G1 | K | D1 | D2 | M,                     // '&'
    I,                                                 // '\''
    J | M,                                             // '('
    H | K,                                             // ')'
    G1 | G2 | H | I | J | K | L | M,                   // '*'
    G1 | G2 | I | L,                                   // '+'
    K,                                                 // ','
    G1 | G2,                                           // '-'
    L,                                                 // '.'
    J | K,                                             // '/'
    A1 | A2 | B | C | D1 | D2 | E | F | J | K,         // '0'
    B | C | J,                                         // '1'
    A1 | A2 | B | D1 | D2 | E | G1 | G2,               // '2'
    A1 | A2 | B | C | D1 | D2 | G2,                    // '3'
    B | C | F | G1 | G2,                               // '4'
    A1 | A2 | C | D1 | D2 | F | G1 | G2,               // '5'
    A1 | A2 | C | D1 | D2 | E | F | G1 | G2,           // '6'
    A1 | A2 | B | C,                                   // '7'
    A1 | A2 | B | C | D1 | D2 | E | F | G1 | G2,       // '8'
    A1 | A2 | B | C | D1 | D2 | F | G1 | G2,           // '9'
    I | L,                                             // ':'
    I | K,                                             // ';'
    J | M,                                             // '<'
    D1 | D2 | G1 | G2,                                 // '='
    H | K,                                             // '>'
    A1 | A2 | B | G2 | L,                              // '?'
    A1 | A2 | B | C | D1 | D2 | E | G2 | I,            // '@'
    A1 | A2 | B | C | E | F | G1 | G2,                 // 'A'
    A1 | A2 | B | C | D1 | D2 | G2 | I | L,            // 'B'
    A1 | A2 | D1 | D2 | E | F,                         // 'C'
    A1 | A2 | B | C | D1 | D2 | I | L,                 // 'D'
    A1 | A2 | D1 | D2 | E | F | G1,                    // 'E'
    A1 | A2 | E | F | G1,                              // 'F'
    A1 | A2 | C | D1 | D2 | E | F | G2,                // 'G'
    B | C | E | F | G1 | G2,                           // 'H'
    A1 | A2 | D1 | D2 | I | L,                         // 'I'
    B | C | D1 | D2 | E,                               // 'J'
    E | F | G1 | J | M,                                // 'K'
    D1 | D2 | E | F,                                   // 'L'
    B | C | E | F | H | J,                             // 'M'
    B | C | E | F | H | M,                             // 'N'
    A1 | A2 | B | C | D1 | D2 | E | F,                 // 'O'
    A1 | A2 | B | E | F | G1 | G2,                     // 'P'
    A1 | A2 | B | C | D1 | D2 | E | F | M,             // 'Q'
    A1 | A2 | B | E | F | G1 | G2 | M,                 // 'R'
    A1 | A2 | C | D1 | D2 | F | G1 | G2,               // 'S'
    A1 | A2 | I | L,                                   // 'T'
    B | C | D1 | D2 | E | F,                           // 'U'
    E | F | J | K,                                     // 'V'
    B | C | E | F | K | M,                             // 'W'
    H | J | K | M,                                     // 'X'
    H | J | L,                                         // 'Y'
    A1 | A2 | D1 | D2 | J | K,                         // 'Z'
    A2 | D2 | I | L,                                   // '['
    H | M,                                             // '\\'
    A1 | D1 | I | L,                                   // ']'
    K | M,                                             // '^'
    D1 | D2,                                           // '_'
];

/// Segment mask for one character
///
/// Lower-case letters are folded to upper case. Characters the table
/// does not cover come back as the all-zero (blank) mask; that is the
/// defined fallback, not an error.
pub fn char_mask(c: u8) -> u16 {
    let c = if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c
    };

    if !(FIRST_CHAR..=LAST_CHAR).contains(&c) {
        return 0;
    }

    FONT[(c - FIRST_CHAR) as usize]
}
