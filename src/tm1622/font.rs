//! ASCII to 16 segment glyph table
//!
//! Each bit of a glyph switches one segment:
//! `0=a 1=b 2=c 3=d 4=e 5=f 6=g 7=h 8=i 9=j 10=k 11=l 12=m 13=n 14=p 15=u`.
//! The wiring follows the glass this driver was written for, adjust the table
//! if your segment order differs.

use crate::tm1622::NIBBLES_PER_DIGIT;

/// Mask with every segment off
pub const BLANK: u16 = 0x0000;

/// Glyphs authored for this glass, everything else renders blank
const GLYPHS: [(u8, u16); 18] = [
    (b'0', 0b0011_1111_1111_1111), // all but g
    (b'1', 0b0000_0000_0011_0000), // b,c
    (b'2', 0b0011_1100_1110_1111), // a,b,d,e,g,p
    (b'3', 0b0011_1100_1011_1111), // a,b,c,d,g,p
    (b'4', 0b0000_0011_0011_0011), // f,g,b,c
    (b'5', 0b0011_1111_0011_1110), // a,f,g,c,d,p
    (b'6', 0b0011_1111_1111_1110), // a,f,e,d,c,g,p
    (b'7', 0b0000_0000_0011_1111), // a,b,c
    (b'8', 0b0011_1111_1111_1111), // all
    (b'9', 0b0011_1111_0011_1111), // a,b,c,d,f,g,p
    (b'A', 0b0011_0011_1111_1111), // a,b,c,e,f,g
    (b'B', 0b0000_1111_1111_1100), // c,d,e,f,g,h,k
    (b'C', 0b0011_1100_0000_1111), // a,d,e,f
    (b'D', 0b0000_1100_1111_1100), // b,c,d,e,g,k
    (b'E', 0b0011_1111_1000_1111), // a,d,e,f,g
    (b'F', 0b0011_0011_1000_1111), // a,e,f,g
    (b'-', 0b0000_0000_1000_0000), // g
    (b' ', BLANK),
];

const fn build_table() -> [u16; 128] {
    let mut table = [BLANK; 128];
    let mut i = 0;
    while i < GLYPHS.len() {
        let (ch, mask) = GLYPHS[i];
        table[ch as usize] = mask;
        i += 1;
    }
    table
}

/// Segment masks indexed by ASCII code
pub static FONT: [u16; 128] = build_table();

/// Segment mask for `c`, blank for characters without a glyph
pub fn glyph(c: char) -> u16 {
    let code = c as u32;
    if code < 128 {
        FONT[code as usize]
    } else {
        BLANK
    }
}

/// Split a segment mask into the nibbles written at nibble index 0..4
///
/// Nibble `i` holds bits `4i..4i+4`.
pub const fn nibbles(mask: u16) -> [u8; NIBBLES_PER_DIGIT as usize] {
    [
        (mask & 0x0F) as u8,
        ((mask >> 4) & 0x0F) as u8,
        ((mask >> 8) & 0x0F) as u8,
        ((mask >> 12) & 0x0F) as u8,
    ]
}

/// Inverse of [`nibbles`]
#[cfg(test)]
pub(crate) const fn join(nibbles: [u8; NIBBLES_PER_DIGIT as usize]) -> u16 {
    (nibbles[0] & 0x0F) as u16
        | ((nibbles[1] & 0x0F) as u16) << 4
        | ((nibbles[2] & 0x0F) as u16) << 8
        | ((nibbles[3] & 0x0F) as u16) << 12
}
