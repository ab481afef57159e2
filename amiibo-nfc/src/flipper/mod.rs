//! Flipper Zero `.nfc` tag files
//!
//! The header values describe a generic, freshly derived NTAG215. None of
//! them are read from the dump.

pub mod document;

pub use document::NfcDocument;

/// `Filetype:` line value
pub const FILETYPE: &str = "Flipper NFC device";

/// `Version:` line value
pub const FORMAT_VERSION: u32 = 2;

/// `Device type:` line value
pub const DEVICE_TYPE: &str = "NTAG215";

/// Answer To Request, type A
pub const ATQA: [u8; 2] = [0x44, 0x00];

/// Select Acknowledge
pub const SAK: u8 = 0x00;

/// Originality signature length
pub const SIGNATURE_LEN: usize = 32;

/// Originality signature, left blank
pub const SIGNATURE: [u8; SIGNATURE_LEN] = [0x00; SIGNATURE_LEN];

/// GET_VERSION response of an NTAG215
pub const MIFARE_VERSION: [u8; 8] = [
    0x00, // Fixed header
    0x04, // Vendor: NXP
    0x04, // Product type: NTAG
    0x02, // Product subtype: 50 pF
    0x01, // Major product version
    0x00, // Minor product version
    0x11, // Storage size: 504 bytes user memory
    0x03, // Protocol type: ISO/IEC 14443-3
];

/// Number of one-way counters (each paired with a tearing flag)
pub const COUNTER_COUNT: usize = 3;

/// Default counter value
pub const COUNTER_DEFAULT: u32 = 0;

/// Default tearing flag
pub const TEARING_DEFAULT: u8 = 0x00;

/// Output file extension
pub const NFC_EXTENSION: &str = "nfc";
