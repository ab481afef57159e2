//! Page rendering

use std::fmt;

use super::{
    hexify, NormalizedDump, Password, CONFIG_PAGE_DEFAULT, PACK_PAGE, PAGE_COUNT, PAGE_SIZE,
    PWD_PAGE,
};

/// A single tag page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub data: [u8; PAGE_SIZE],
}

impl Page {
    pub fn new(index: usize, data: [u8; PAGE_SIZE]) -> Self {
        Self { index, data }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {}: {}", self.index, hexify(&self.data))
    }
}

/// Build the page list for a dump
///
/// Pages up to 132 are copied from the dump. The password page is replaced
/// by `password` and the PACK/config page by `CONFIG_PAGE_DEFAULT`, whatever
/// the dump held there.
pub fn render_pages(dump: &NormalizedDump, password: &Password) -> Vec<Page> {
    let mut pages: Vec<Page> = dump
        .pages()
        .enumerate()
        .map(|(index, data)| Page::new(index, data))
        .collect();
    debug_assert_eq!(pages.len(), PAGE_COUNT);

    pages[PWD_PAGE].data = *password.as_bytes();
    pages[PACK_PAGE].data = CONFIG_PAGE_DEFAULT;
    pages
}

/// Join pages into newline-separated `Page N: ..` lines
pub fn render_page_lines(pages: &[Page]) -> String {
    pages.iter().map(Page::to_string).collect::<Vec<_>>().join("\n")
}
