//! Amiibo dump to Flipper Zero `.nfc` converter
//!
//! Amiibo figurines carry an NTAG215 tag. This crate turns a raw memory dump
//! of such a tag into the text tag description the Flipper Zero uses for
//! emulation:
//!
//! 1. normalize the dump to 135 pages of 4 bytes
//! 2. extract the 7-byte UID
//! 3. derive the default password from the UID
//! 4. render the pages, overwriting the password and PACK/config pages
//! 5. assemble the `.nfc` document
//!
//! # Example
//! ```
//! let nfc = amiibo_nfc::convert_dump(&[0u8; 540]).unwrap();
//! assert!(nfc.contains("UID: 00 00 00 00 00 00 00"));
//! assert!(nfc.ends_with("Page 133: AA 55 AA 55\nPage 134: 80 80 00 00"));
//! ```

pub mod batch;
pub mod error;
pub mod flipper;
pub mod ntag;

use log::debug;

pub use batch::{BatchConfig, BatchReport};
pub use error::ConvertError;
pub use flipper::NfcDocument;
pub use ntag::{NormalizedDump, Page, Password, Uid};

/// Build the `.nfc` document for a raw dump
pub fn build_document(raw: &[u8]) -> Result<NfcDocument, ConvertError> {
    let dump = NormalizedDump::from_raw(raw);
    let uid = Uid::from_dump(dump.as_bytes())?;
    let password = Password::derive(&uid);
    debug!("UID {} -> password {}", uid, password);

    let pages = ntag::render_pages(&dump, &password);
    Ok(NfcDocument::new(uid, pages))
}

/// Convert a raw dump into `.nfc` file contents
pub fn convert_dump(raw: &[u8]) -> Result<String, ConvertError> {
    build_document(raw).map(|doc| doc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ntag::{DUMP_SIZE, PAGE_COUNT};

    fn page_lines(nfc: &str) -> Vec<&str> {
        nfc.lines().filter(|l| l.starts_with("Page ")).collect()
    }

    #[test]
    fn test_all_zero_dump() {
        let nfc = convert_dump(&[0u8; DUMP_SIZE]).unwrap();
        assert!(nfc.contains("\nUID: 00 00 00 00 00 00 00\n"));

        let pages = page_lines(&nfc);
        assert_eq!(pages.len(), PAGE_COUNT);
        for (i, line) in pages.iter().enumerate().take(133) {
            assert_eq!(*line, format!("Page {}: 00 00 00 00", i));
        }
        assert_eq!(pages[133], "Page 133: AA 55 AA 55");
        assert_eq!(pages[134], "Page 134: 80 80 00 00");
    }

    #[test]
    fn test_empty_dump() {
        assert_eq!(convert_dump(&[]).unwrap(), convert_dump(&[0u8; DUMP_SIZE]).unwrap());
    }

    #[test]
    fn test_short_dump_padded() {
        let mut raw = vec![0x04, 0x11, 0x22, 0x88, 0x33, 0x44, 0x55, 0x66];
        raw.extend_from_slice(&[0xAB; 10]);
        let nfc = convert_dump(&raw).unwrap();
        let pages = page_lines(&nfc);

        assert_eq!(pages.len(), PAGE_COUNT);
        assert_eq!(pages[4], "Page 4: AB AB 00 00");
        assert!(pages[5..133].iter().all(|l| l.ends_with(": 00 00 00 00")));
    }

    #[test]
    fn test_oversized_dump_truncated() {
        let mut raw = vec![0x01u8; DUMP_SIZE];
        raw.extend_from_slice(&[0xCC; 32]);
        let nfc = convert_dump(&raw).unwrap();

        assert_eq!(page_lines(&nfc).len(), PAGE_COUNT);
        assert!(!nfc.contains("CC"));
        assert_eq!(nfc, convert_dump(&raw[..DUMP_SIZE]).unwrap());
    }

    #[test]
    fn test_realistic_uid_and_password() {
        let mut raw = vec![0u8; 532];
        raw[..8].copy_from_slice(&[0x04, 0x12, 0x34, 0xA2, 0x56, 0x78, 0x9A, 0xBC]);
        let doc = build_document(&raw).unwrap();

        assert_eq!(doc.uid().to_string(), "04 12 34 56 78 9A BC");
        let expected = Password::derive(doc.uid());
        assert_eq!(&doc.pages()[133].data, expected.as_bytes());
        assert_eq!(doc.pages()[134].data, [0x80, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_trailer_source_bytes_ignored() {
        let mut a = vec![0u8; DUMP_SIZE];
        let mut b = vec![0u8; DUMP_SIZE];
        a[532..].copy_from_slice(&[0x11; 8]);
        b[532..].copy_from_slice(&[0xEE; 8]);
        assert_eq!(convert_dump(&a).unwrap(), convert_dump(&b).unwrap());
    }
}
