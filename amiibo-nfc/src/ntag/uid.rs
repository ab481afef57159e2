//! UID extraction
//!
//! The NTAG215 serial number spans pages 0 and 1:
//! `UID0 UID1 UID2 BCC0 | UID3 UID4 UID5 UID6`. The check byte BCC0 is not
//! part of the UID.

use std::fmt;

use crate::error::ConvertError;
use super::hexify;

/// UID length in bytes
pub const UID_LEN: usize = 7;

/// Offset of the check byte BCC0
pub const BCC0_OFFSET: usize = 3;

/// Bytes of the dump needed to extract the UID
pub const UID_SOURCE_LEN: usize = UID_LEN + 1;

/// 7-byte tag UID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    /// Create a UID from raw bytes
    pub fn new(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }

    /// Extract the UID from the start of a dump
    ///
    /// Takes bytes 0..3 and 4..8, dropping BCC0. Fails with
    /// `MalformedInput` if fewer than 8 bytes are available.
    pub fn from_dump(bytes: &[u8]) -> Result<Self, ConvertError> {
        if bytes.len() < UID_SOURCE_LEN {
            return Err(ConvertError::MalformedInput { len: bytes.len() });
        }

        Ok(Self::from_serial(&bytes[..UID_SOURCE_LEN]))
    }

    fn from_serial(serial: &[u8]) -> Self {
        let mut uid = [0u8; UID_LEN];
        uid[..BCC0_OFFSET].copy_from_slice(&serial[..BCC0_OFFSET]);
        uid[BCC0_OFFSET..].copy_from_slice(&serial[BCC0_OFFSET + 1..UID_SOURCE_LEN]);
        Self(uid)
    }

    /// Get the UID bytes
    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hexify(&self.0))
    }
}
