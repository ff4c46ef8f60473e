//! Reference AES-128 key schedule.
//!
//! This crate follows FIPS-197 section 5.2 and provides:
//! - GF(2^8) doubling and the round-constant table derived from it.
//! - The S-Box and the RotWord/SubWord word primitives.
//! - Expansion of a 16-byte key into 44 words (11 round keys), plus a traced
//!   variant that records every intermediate value.
//!
//! Tables are compile-time constants and every expansion is a pure function
//! of its key, so schedules can be computed concurrently without coordination.
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.
//!
//! ```
//! use aes_keysched::{expand_key, CipherKey};
//!
//! let key = CipherKey::from([
//!     0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
//!     0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
//! ]);
//! let schedule = expand_key(&key);
//! assert_eq!(schedule.word(4), Some(&[0xa0, 0xfa, 0xfe, 0x17]));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod gf;
mod key;
mod rcon;
mod sbox;
mod schedule;
mod trace;
mod word;

pub use crate::error::KeyError;
pub use crate::gf::gf_double;
pub use crate::key::{CipherKey, KEY_LEN};
pub use crate::rcon::{rcon, RCON};
pub use crate::sbox::{sbox, SBOX};
pub use crate::schedule::{
    core_transform, expand_key, expand_key_bytes, KeySchedule, RoundKey, NK, NR, ROUND_KEYS,
    SCHEDULE_WORDS,
};
pub use crate::trace::{expand_key_trace, ExpansionStep, TRACE_STEPS};
pub use crate::word::{rot_word, sub_word, xor_word, Word};
