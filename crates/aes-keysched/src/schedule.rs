//! AES-128 key expansion.

use crate::error::KeyError;
use crate::key::{CipherKey, KEY_LEN};
use crate::rcon::rcon;
use crate::word::{rot_word, sub_word, xor_word, Word};

/// Number of 32-bit words in the cipher key.
pub const NK: usize = 4;
/// Number of rounds.
pub const NR: usize = 10;
/// Number of round keys in the schedule.
pub const ROUND_KEYS: usize = NR + 1;
/// Number of words in the schedule.
pub const SCHEDULE_WORDS: usize = NK * ROUND_KEYS;

/// A 128-bit round key, four schedule words laid out back to back.
pub type RoundKey = [u8; KEY_LEN];

/// The 44-word AES-128 key schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeySchedule(pub [Word; SCHEDULE_WORDS]);

impl KeySchedule {
    /// All schedule words, `w[0]..=w[43]`.
    #[inline]
    pub fn words(&self) -> &[Word; SCHEDULE_WORDS] {
        &self.0
    }

    /// Word `w[index]`, or `None` past the end of the schedule.
    #[inline]
    pub fn word(&self, index: usize) -> Option<&Word> {
        self.0.get(index)
    }

    /// Round key `round` (0..=10), i.e. words `4 * round .. 4 * round + 4`.
    pub fn round_key(&self, round: usize) -> Option<RoundKey> {
        if round >= ROUND_KEYS {
            return None;
        }
        let mut out = [0u8; KEY_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(&self.0[round * NK..]) {
            chunk.copy_from_slice(word);
        }
        Some(out)
    }

    /// All eleven round keys.
    pub fn round_keys(&self) -> [RoundKey; ROUND_KEYS] {
        let mut out = [[0u8; KEY_LEN]; ROUND_KEYS];
        for (round, chunk) in out.iter_mut().zip(self.0.chunks_exact(NK)) {
            for (dst, word) in round.chunks_exact_mut(4).zip(chunk) {
                dst.copy_from_slice(word);
            }
        }
        out
    }

    /// The schedule as 176 contiguous bytes.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_WORDS * 4] {
        let mut out = [0u8; SCHEDULE_WORDS * 4];
        for (dst, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            dst.copy_from_slice(word);
        }
        out
    }
}

/// The transform applied to `w[i - 1]` whenever `i` is a multiple of [`NK`]:
/// RotWord, then SubWord, then XOR of RC[`round`] into the first byte.
#[inline]
pub fn core_transform(word: Word, round: usize) -> Word {
    let mut temp = sub_word(rot_word(word));
    temp[0] ^= rcon(round);
    temp
}

/// Working word for index `i`: `w[i - 1]`, core-transformed on key-word boundaries.
#[inline]
pub(crate) fn schedule_temp(previous: Word, i: usize) -> Word {
    if i % NK == 0 {
        core_transform(previous, i / NK)
    } else {
        previous
    }
}

/// Expands a 128-bit key into the full 44-word schedule.
pub fn expand_key(key: &CipherKey) -> KeySchedule {
    let mut w = [[0u8; 4]; SCHEDULE_WORDS];
    w[..NK].copy_from_slice(&key.words());

    for i in NK..SCHEDULE_WORDS {
        let temp = schedule_temp(w[i - 1], i);
        w[i] = xor_word(w[i - NK], temp);
    }

    KeySchedule(w)
}

/// Expands a key given as a byte slice, rejecting anything but 16 bytes.
pub fn expand_key_bytes(key: &[u8]) -> Result<KeySchedule, KeyError> {
    let key = CipherKey::try_from(key)?;
    Ok(expand_key(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const FIPS_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    fn random_key(rng: &mut impl RngCore) -> CipherKey {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        CipherKey::from(bytes)
    }

    #[test]
    fn first_round_key_matches_fips() {
        let schedule = expand_key(&CipherKey::from(FIPS_KEY));
        assert_eq!(schedule.round_key(0), Some(FIPS_KEY));
        assert_eq!(
            schedule.round_key(1),
            Some([
                0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a, 0x6c,
                0x76, 0x05
            ])
        );
    }

    #[test]
    fn core_transform_matches_fips_step() {
        assert_eq!(
            core_transform([0x09, 0xcf, 0x4f, 0x3c], 1),
            [0x8b, 0x84, 0xeb, 0x01]
        );
    }

    #[test]
    fn temp_is_untouched_off_boundary() {
        let w = [0x12, 0x34, 0x56, 0x78];
        for i in (NK..SCHEDULE_WORDS).filter(|i| i % NK != 0) {
            assert_eq!(schedule_temp(w, i), w);
        }
    }

    #[test]
    fn seed_words_are_the_key() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let key = random_key(&mut rng);
            let schedule = expand_key(&key);
            assert_eq!(&schedule.words()[..NK], &key.words()[..]);
        }
    }

    #[test]
    fn recurrence_holds_for_random_keys() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let schedule = expand_key(&random_key(&mut rng));
            let w = schedule.words();
            for i in NK..SCHEDULE_WORDS {
                let temp = if i % NK == 0 {
                    let mut t = sub_word(rot_word(w[i - 1]));
                    t[0] ^= rcon(i / NK);
                    t
                } else {
                    w[i - 1]
                };
                assert_eq!(w[i], xor_word(w[i - NK], temp), "word {i}");
            }
        }
    }

    #[test]
    fn expansion_is_deterministic() {
        let mut rng = rand::thread_rng();
        let key = random_key(&mut rng);
        assert_eq!(expand_key(&key), expand_key(&key));
    }

    #[test]
    fn views_agree_with_words() {
        let schedule = expand_key(&CipherKey::from(FIPS_KEY));
        let bytes = schedule.to_bytes();
        let round_keys = schedule.round_keys();
        for r in 0..ROUND_KEYS {
            assert_eq!(Some(round_keys[r]), schedule.round_key(r));
            assert_eq!(&bytes[r * 16..r * 16 + 16], &round_keys[r][..]);
        }
        assert_eq!(schedule.round_key(ROUND_KEYS), None);
        assert_eq!(schedule.word(43), Some(&[0xb6, 0x63, 0x0c, 0xa6]));
        assert_eq!(schedule.word(44), None);
    }

    #[test]
    fn byte_slice_entry_point() {
        assert_eq!(
            expand_key_bytes(&FIPS_KEY),
            Ok(expand_key(&CipherKey::from(FIPS_KEY)))
        );
        assert_eq!(
            expand_key_bytes(&FIPS_KEY[..15]),
            Err(KeyError::InvalidKeyLength {
                expected: 16,
                actual: 15
            })
        );
    }
}
