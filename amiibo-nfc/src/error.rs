//! Conversion errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting dumps
///
/// Everything except `Walk` concerns a single file; the batch logs it and
/// moves on to the next dump.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read dump {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write nfc file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to scan input directory {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dump too short for UID: expected at least 8 bytes, got {len}")]
    MalformedInput { len: usize },

    #[error("{path:?} is not inside the input directory")]
    OutsideInputRoot { path: PathBuf },
}
