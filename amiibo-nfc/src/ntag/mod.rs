//! NTAG215 memory layout
//!
//! An NTAG215 tag exposes 135 pages of 4 bytes each. This module holds the
//! layout constants and the types derived from a raw dump: the normalized
//! page image, the UID, the default password and the rendered pages.

pub mod dump;
pub mod uid;
pub mod password;
pub mod page;

pub use dump::NormalizedDump;
pub use uid::Uid;
pub use password::Password;
pub use page::{render_pages, render_page_lines, Page};

/// Number of pages on an NTAG215 (0 to 134)
pub const PAGE_COUNT: usize = 135;

/// Bytes per page
pub const PAGE_SIZE: usize = 4;

/// Size of a normalized dump (135 * 4)
pub const DUMP_SIZE: usize = PAGE_COUNT * PAGE_SIZE;

/// Page holding the 32-bit password (PWD)
pub const PWD_PAGE: usize = 133;

/// Page holding PACK and the configuration bytes
pub const PACK_PAGE: usize = 134;

/// Fixed contents written to `PACK_PAGE`
pub const CONFIG_PAGE_DEFAULT: [u8; PAGE_SIZE] = [0x80, 0x80, 0x00, 0x00];

/// Format bytes as uppercase hex pairs separated by single spaces
pub fn hexify(value: &[u8]) -> String {
    value.iter().map(|b| format!("{:02X}", b)).collect::<Vec<_>>().join(" ")
}
