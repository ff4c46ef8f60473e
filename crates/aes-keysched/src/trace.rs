//! Step-by-step record of a key expansion, laid out like FIPS-197 Appendix A.

use crate::key::CipherKey;
use crate::rcon::rcon;
use crate::schedule::{schedule_temp, NK, SCHEDULE_WORDS};
use crate::word::{rot_word, sub_word, xor_word, Word};

/// Number of derived words, one step each.
pub const TRACE_STEPS: usize = SCHEDULE_WORDS - NK;

/// Intermediate values while deriving `w[index]`.
///
/// `rotated`, `substituted` and `rcon` are only present when `index` is a
/// multiple of [`NK`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpansionStep {
    /// Schedule index being derived (4..=43).
    pub index: usize,
    /// `w[index - 1]`.
    pub temp: Word,
    /// RotWord(temp).
    pub rotated: Option<Word>,
    /// SubWord(RotWord(temp)).
    pub substituted: Option<Word>,
    /// Round constant word `[RC[index / 4], 0, 0, 0]`.
    pub rcon: Option<Word>,
    /// The working word after the optional transform.
    pub after_rcon: Word,
    /// `w[index - 4]`.
    pub previous: Word,
    /// `w[index]`.
    pub result: Word,
}

/// Expands `key` and records every derived word.
pub fn expand_key_trace(key: &CipherKey) -> [ExpansionStep; TRACE_STEPS] {
    let mut w = [[0u8; 4]; SCHEDULE_WORDS];
    w[..NK].copy_from_slice(&key.words());
    let mut steps = [ExpansionStep::default(); TRACE_STEPS];

    for (i, step) in (NK..SCHEDULE_WORDS).zip(steps.iter_mut()) {
        let temp = w[i - 1];
        let after_rcon = schedule_temp(temp, i);
        w[i] = xor_word(w[i - NK], after_rcon);

        let boundary = i % NK == 0;
        *step = ExpansionStep {
            index: i,
            temp,
            rotated: boundary.then(|| rot_word(temp)),
            substituted: boundary.then(|| sub_word(rot_word(temp))),
            rcon: boundary.then(|| [rcon(i / NK), 0, 0, 0]),
            after_rcon,
            previous: w[i - NK],
            result: w[i],
        };
    }

    steps
}
