//! Dump normalization
//!
//! Coerces a raw dump of any length into the fixed NTAG215 page image.

use log::debug;

use super::{DUMP_SIZE, PAGE_COUNT, PAGE_SIZE};

/// A dump coerced to exactly `PAGE_COUNT` pages of `PAGE_SIZE` bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDump {
    bytes: [u8; DUMP_SIZE],
}

impl NormalizedDump {
    /// Normalize a raw dump
    ///
    /// Short dumps (including a trailing partial page) are zero-padded,
    /// oversized dumps such as the 572-byte variant are truncated after the
    /// last page. Never fails; an empty dump yields an all-zero image.
    pub fn from_raw(raw: &[u8]) -> Self {
        let mut bytes = [0u8; DUMP_SIZE];
        let copied = raw.len().min(DUMP_SIZE);
        bytes[..copied].copy_from_slice(&raw[..copied]);

        if raw.len() > DUMP_SIZE {
            debug!("Dropping {} bytes past page {}", raw.len() - DUMP_SIZE, PAGE_COUNT - 1);
        } else if raw.len() < DUMP_SIZE {
            debug!("Zero-padding dump from {} to {} bytes", raw.len(), DUMP_SIZE);
        }

        Self { bytes }
    }

    /// Get the full page image
    pub fn as_bytes(&self) -> &[u8; DUMP_SIZE] {
        &self.bytes
    }

    /// Get a single page, `None` if `index` is past the last page
    pub fn page(&self, index: usize) -> Option<[u8; PAGE_SIZE]> {
        if index >= PAGE_COUNT {
            return None;
        }
        let start = index * PAGE_SIZE;
        let mut page = [0u8; PAGE_SIZE];
        page.copy_from_slice(&self.bytes[start..start + PAGE_SIZE]);
        Some(page)
    }

    /// Iterate over all pages in index order
    pub fn pages(&self) -> impl Iterator<Item = [u8; PAGE_SIZE]> + '_ {
        self.bytes.chunks_exact(PAGE_SIZE).map(|chunk| {
            let mut page = [0u8; PAGE_SIZE];
            page.copy_from_slice(chunk);
            page
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_exact_size_unchanged() {
        let raw = sequence(DUMP_SIZE);
        let dump = NormalizedDump::from_raw(&raw);
        assert_eq!(&dump.as_bytes()[..], &raw[..]);

        // Normalizing twice changes nothing
        let again = NormalizedDump::from_raw(dump.as_bytes());
        assert_eq!(again, dump);
    }

    #[test]
    fn test_empty_is_all_zero() {
        let dump = NormalizedDump::from_raw(&[]);
        assert_eq!(dump.as_bytes().len(), DUMP_SIZE);
        assert!(dump.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_short_dump_zero_padded() {
        // 532-byte dumps are missing the last two pages
        let raw = vec![0xFFu8; 532];
        let dump = NormalizedDump::from_raw(&raw);
        assert!(dump.as_bytes()[..532].iter().all(|&b| b == 0xFF));
        assert!(dump.as_bytes()[532..].iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_partial_page_padded() {
        let dump = NormalizedDump::from_raw(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert_eq!(dump.page(0), Some([0x01, 0x02, 0x03, 0x04]));
        assert_eq!(dump.page(1), Some([0x05, 0x06, 0x00, 0x00]));
        assert_eq!(dump.page(2), Some([0x00; 4]));
    }

    #[test]
    fn test_oversized_dump_truncated() {
        let mut raw = sequence(DUMP_SIZE);
        // 572 bytes; the sequence never produces 0xFB
        raw.extend_from_slice(&[0xFB; 32]);
        let dump = NormalizedDump::from_raw(&raw);
        assert_eq!(&dump.as_bytes()[..], &raw[..DUMP_SIZE]);
        assert!(!dump.as_bytes().contains(&0xFB));
    }

    #[test]
    fn test_page_access() {
        let dump = NormalizedDump::from_raw(&sequence(DUMP_SIZE));
        assert_eq!(dump.page(1), Some([4, 5, 6, 7]));
        assert_eq!(dump.page(PAGE_COUNT), None);
        assert_eq!(dump.pages().count(), PAGE_COUNT);
        assert_eq!(dump.pages().nth(1), dump.page(1));
    }
}
