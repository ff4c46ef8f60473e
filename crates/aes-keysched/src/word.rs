//! Four-byte word primitives used by the key schedule.

use crate::sbox::sbox;

/// A 32-bit key-schedule word, most-significant byte first.
pub type Word = [u8; 4];

/// Cyclic left rotation by one byte: `[b0, b1, b2, b3] -> [b1, b2, b3, b0]`.
#[inline]
pub fn rot_word(word: Word) -> Word {
    let [b0, b1, b2, b3] = word;
    [b1, b2, b3, b0]
}

/// Applies the S-Box to each byte of the word.
#[inline]
pub fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

/// Byte-wise XOR of two words.
#[inline]
pub fn xor_word(a: Word, b: Word) -> Word {
    let mut out = a;
    for (o, r) in out.iter_mut().zip(b.iter()) {
        *o ^= *r;
    }
    out
}
