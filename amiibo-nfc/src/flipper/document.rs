//! `.nfc` document assembly

use std::fmt::{self, Write as _};

use crate::ntag::{hexify, render_page_lines, Page, Uid, PAGE_COUNT};
use super::{
    ATQA, COUNTER_COUNT, COUNTER_DEFAULT, DEVICE_TYPE, FILETYPE, FORMAT_VERSION, MIFARE_VERSION,
    SAK, SIGNATURE, TEARING_DEFAULT,
};

/// A complete Flipper NFC device file for one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfcDocument {
    uid: Uid,
    pages: Vec<Page>,
}

impl NfcDocument {
    pub fn new(uid: Uid, pages: Vec<Page>) -> Self {
        Self { uid, pages }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Render the header block, ending with the `Pages total:` line
    fn header(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "Filetype: {}", FILETYPE)?;
        writeln!(out, "Version: {}", FORMAT_VERSION)?;
        writeln!(out, "# Nfc device type can be UID, Mifare Ultralight, Bank card")?;
        writeln!(out, "Device type: {}", DEVICE_TYPE)?;
        writeln!(out, "# UID, ATQA and SAK are common for all formats")?;
        writeln!(out, "UID: {}", self.uid)?;
        writeln!(out, "ATQA: {}", hexify(&ATQA))?;
        writeln!(out, "SAK: {:02X}", SAK)?;
        writeln!(out, "# Mifare Ultralight specific data")?;
        writeln!(out, "Signature: {}", hexify(&SIGNATURE))?;
        writeln!(out, "Mifare version: {}", hexify(&MIFARE_VERSION))?;
        for i in 0..COUNTER_COUNT {
            writeln!(out, "Counter {}: {}", i, COUNTER_DEFAULT)?;
            writeln!(out, "Tearing {}: {:02X}", i, TEARING_DEFAULT)?;
        }
        writeln!(out, "Pages total: {}", PAGE_COUNT)?;
        Ok(out)
    }
}

impl fmt::Display for NfcDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header()?)?;
        f.write_str(&render_page_lines(&self.pages))
    }
}
