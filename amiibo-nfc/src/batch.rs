//! Batch conversion of dump directories
//!
//! Walks an input tree for `.bin` dumps and writes one `.nfc` file per dump
//! into a mirrored tree under the output directory. A failing file is logged
//! and skipped; only an unreadable input root stops the run.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::convert_dump;
use crate::error::ConvertError;
use crate::flipper::NFC_EXTENSION;

/// Default directory scanned for dumps
pub const DEFAULT_INPUT_DIR: &str = "Amiibo Bins";

/// Default directory receiving `.nfc` files
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default dump file extension
pub const DEFAULT_INPUT_EXTENSION: &str = "bin";

/// Batch conversion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Extension of dump files, without the dot
    pub input_extension: String,
    /// Extension given to output files, without the dot
    pub output_extension: String,
}

impl BatchConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            input_extension: DEFAULT_INPUT_EXTENSION.to_string(),
            output_extension: NFC_EXTENSION.to_string(),
        }
    }
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files written
    pub converted: Vec<PathBuf>,
    /// Dumps that could not be converted
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Recursively collect files under `root` ending in `.<extension>`
///
/// Paths are returned sorted. Unreadable subdirectories are logged and
/// skipped; an unreadable `root` is an error.
pub fn collect_dumps(root: &Path, extension: &str) -> Result<Vec<PathBuf>, ConvertError> {
    let mut files = Vec::new();
    let entries = fs::read_dir(root).map_err(|source| ConvertError::Walk {
        path: root.to_path_buf(),
        source,
    })?;
    collect_recursive(entries, extension, &mut files);
    files.sort();
    Ok(files)
}

fn collect_recursive(entries: fs::ReadDir, extension: &str, files: &mut Vec<PathBuf>) {
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };
        let path = entry.path();

        // file_type() does not follow symlinks, so linked directories are never entered
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                warn!("Skipping {:?}: {}", path, e);
                continue;
            }
        };

        if file_type.is_symlink() && path.is_dir() {
            debug!("Not following directory symlink {:?}", path);
        } else if file_type.is_dir() {
            match fs::read_dir(&path) {
                Ok(sub) => collect_recursive(sub, extension, files),
                Err(e) => warn!("Skipping unreadable directory {:?}: {}", path, e),
            }
        } else if has_extension(&path, extension) {
            files.push(path);
        }
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == extension)
        .unwrap_or(false)
}

/// Map a dump path to its output path
///
/// The input root prefix is replaced by the output root and the extension
/// by `config.output_extension`.
pub fn output_path_for(dump: &Path, config: &BatchConfig) -> Result<PathBuf, ConvertError> {
    let relative = dump
        .strip_prefix(&config.input_dir)
        .map_err(|_| ConvertError::OutsideInputRoot { path: dump.to_path_buf() })?;
    Ok(config
        .output_dir
        .join(relative)
        .with_extension(&config.output_extension))
}

/// Convert one dump file and write the result to `output`
pub fn convert_file(dump: &Path, output: &Path) -> Result<(), ConvertError> {
    let raw = fs::read(dump).map_err(|source| ConvertError::Read {
        path: dump.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {:?}", raw.len(), dump);

    let content = convert_dump(&raw)?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|source| ConvertError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(output, content).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })
}

/// Convert every dump under `config.input_dir`
///
/// Per-file failures are logged and collected in the report.
pub fn run(config: &BatchConfig) -> Result<BatchReport, ConvertError> {
    let dumps = collect_dumps(&config.input_dir, &config.input_extension)?;
    info!("Found {} dump(s) in {:?}", dumps.len(), config.input_dir);

    let mut report = BatchReport::default();
    for dump in dumps {
        info!("Processing file: {:?}", dump);

        let result = output_path_for(&dump, config)
            .and_then(|output| convert_file(&dump, &output).map(|()| output));

        match result {
            Ok(output) => {
                debug!("Wrote {:?}", output);
                report.converted.push(output);
            }
            Err(e) => {
                error!("{}", e);
                report.failed.push((dump, e));
            }
        }
    }

    info!(
        "Converted {} file(s), {} failed",
        report.converted.len(),
        report.failed.len()
    );
    Ok(report)
}
