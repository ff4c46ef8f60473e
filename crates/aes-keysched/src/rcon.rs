//! Round constants for the AES-128 key schedule.

use crate::gf::gf_double;

/// Number of round constants consumed by AES-128 (one per round).
pub const RCON_LEN: usize = 10;

const fn round_constants() -> [u8; RCON_LEN] {
    let mut table = [0u8; RCON_LEN];
    let mut value = 1u8;
    let mut i = 0;
    while i < RCON_LEN {
        table[i] = value;
        value = gf_double(value);
        i += 1;
    }
    table
}

/// RC[1..=10] stored zero-based: `RCON[j - 1]` is RC[j] = x^(j-1) in GF(2^8).
pub const RCON: [u8; RCON_LEN] = round_constants();

/// Returns RC[`round`] for `round` in `1..=10`.
///
/// # Panics
///
/// Panics if `round` is zero or greater than ten. RC[0] is not defined.
#[inline]
pub fn rcon(round: usize) -> u8 {
    assert!(
        (1..=RCON_LEN).contains(&round),
        "round constant index {round} outside 1..=10"
    );
    RCON[round - 1]
}
