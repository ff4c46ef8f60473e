//! Byte arithmetic in GF(2^8) under the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial 0x11B.
pub const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by x (i.e. 2) in GF(2^8).
#[inline]
pub const fn gf_double(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}
