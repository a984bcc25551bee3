//! Microsoft Binary Format float conversion.

use byteorder::{ByteOrder, LittleEndian};

/// Size in bytes of an MBF single-precision value.
pub const MBF_SIZE: usize = 4;

/// Converts a 4-byte MBF single to an IEEE-754 `f32`.
///
/// MBF stores, little-endian, a 24-bit mantissa with the sign in bit 7 of
/// byte 2, followed by an exponent byte biased by 129 (IEEE uses 127). The
/// conversion is a bit shuffle: the low mantissa bytes are copied, the sign
/// moves to bit 31 and the rebiased exponent is placed below it.
///
/// A zero exponent/high-mantissa word always yields `0.0`.
#[must_use]
pub fn mbf_to_f32(bytes: [u8; MBF_SIZE]) -> f32 {
    let word = LittleEndian::read_u16(&bytes[2..4]);
    if word == 0 {
        return 0.0;
    }

    let word = i32::from(word);
    let exponent = (word & 0xff00) - 0x0200;
    let high = (word & 0x7f) | ((word << 8) & 0x8000) | (exponent >> 1);

    let ieee = [
        bytes[0],
        bytes[1],
        (high & 0xff) as u8,
        ((high >> 8) & 0xff) as u8,
    ];
    LittleEndian::read_f32(&ieee)
}
