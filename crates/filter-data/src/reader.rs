//! Input discovery and opening for the backoff filter.
//!
//! Input is standard input by default, a single log file, or a directory
//! scanned recursively for `.log` files which are read in sorted order as one
//! logical stream.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use filter_core::{FilterError, Result};
use tracing::{debug, warn};

/// Find all `.log` files recursively under `data_path`, sorted by path.
pub fn find_log_files(data_path: &Path) -> Vec<PathBuf> {
    if !data_path.exists() {
        warn!("Input path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "log")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Open the scan input as a buffered reader.
///
/// * `None` – standard input.
/// * A file path – that file.
/// * A directory path – every `.log` file below it, concatenated in sorted
///   order.
///
/// Fails with [`FilterError::DataPathNotFound`] when the path is absent and
/// [`FilterError::NoLogFiles`] when a directory holds no log files.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    let Some(path) = path else {
        debug!("Reading from standard input");
        return Ok(Box::new(BufReader::new(io::stdin())));
    };

    if !path.exists() {
        return Err(FilterError::DataPathNotFound(path.to_path_buf()));
    }

    if path.is_dir() {
        let files = find_log_files(path);
        if files.is_empty() {
            return Err(FilterError::NoLogFiles(path.to_path_buf()));
        }
        debug!("Scanning {} log files under {}", files.len(), path.display());

        let mut chained: Box<dyn Read> = Box::new(io::empty());
        for file_path in files {
            let file = open_file(&file_path)?;
            chained = Box::new(chained.chain(file));
        }
        return Ok(Box::new(BufReader::new(chained)));
    }

    debug!("Reading from {}", path.display());
    Ok(Box::new(BufReader::new(open_file(path)?)))
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| FilterError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
