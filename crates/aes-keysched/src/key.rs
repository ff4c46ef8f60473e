//! Cipher key type for AES-128.

use crate::error::KeyError;
use crate::word::Word;

/// Length of an AES-128 key in bytes.
pub const KEY_LEN: usize = 16;

/// AES-128 cipher key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CipherKey(pub [u8; KEY_LEN]);

impl CipherKey {
    /// Builds a key from integer values, rejecting anything outside `0..=255`.
    ///
    /// The length is checked before any value.
    pub fn from_values(values: &[i64]) -> Result<Self, KeyError> {
        if values.len() != KEY_LEN {
            return Err(KeyError::InvalidKeyLength {
                expected: KEY_LEN,
                actual: values.len(),
            });
        }
        let mut bytes = [0u8; KEY_LEN];
        for (index, (dst, &value)) in bytes.iter_mut().zip(values).enumerate() {
            *dst = u8::try_from(value).map_err(|_| KeyError::InvalidByteValue { index, value })?;
        }
        Ok(Self(bytes))
    }

    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// The key split into four big-endian words, in order.
    pub fn words(&self) -> [Word; 4] {
        let k = &self.0;
        [
            [k[0], k[1], k[2], k[3]],
            [k[4], k[5], k[6], k[7]],
            [k[8], k[9], k[10], k[11]],
            [k[12], k[13], k[14], k[15]],
        ]
    }
}

impl From<[u8; KEY_LEN]> for CipherKey {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for CipherKey {
    type Error = KeyError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_LEN] = value.try_into().map_err(|_| KeyError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: value.len(),
        })?;
        Ok(Self(bytes))
    }
}
