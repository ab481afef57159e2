//! Default password derivation
//!
//! Amiibo tags are locked with a 32-bit password derived from the UID:
//!
//! ```text
//! PWD0 = UID1 ^ UID3 ^ 0xAA
//! PWD1 = UID2 ^ UID4 ^ 0x55
//! PWD2 = UID3 ^ UID5 ^ 0xAA
//! PWD3 = UID4 ^ UID6 ^ 0x55
//! ```

use std::fmt;

use super::{hexify, Uid, PAGE_SIZE};

/// Mask applied to PWD0 and PWD2
pub const PWD_MASK_A: u8 = 0xAA;

/// Mask applied to PWD1 and PWD3
pub const PWD_MASK_B: u8 = 0x55;

/// UID byte pairs feeding each password byte, with the mask applied
const PWD_TERMS: [(usize, usize, u8); PAGE_SIZE] = [
    (1, 3, PWD_MASK_A),
    (2, 4, PWD_MASK_B),
    (3, 5, PWD_MASK_A),
    (4, 6, PWD_MASK_B),
];

/// 4-byte tag password (PWD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Password([u8; PAGE_SIZE]);

impl Password {
    /// Derive the password for a UID
    pub fn derive(uid: &Uid) -> Self {
        let uid = uid.as_bytes();
        let mut pwd = [0u8; PAGE_SIZE];
        for (byte, &(a, b, mask)) in pwd.iter_mut().zip(PWD_TERMS.iter()) {
            *byte = uid[a] ^ uid[b] ^ mask;
        }
        Self(pwd)
    }

    /// Get the password bytes
    pub fn as_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }
}

impl From<&Uid> for Password {
    fn from(uid: &Uid) -> Self {
        Self::derive(uid)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hexify(&self.0))
    }
}
