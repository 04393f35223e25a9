//! Capture loader: path resolution, file read, parse.
//!
//! Every failure comes back as a classified [`StructuredError`]; nothing
//! here panics or logs above debug level.

use super::capture::{parse_capture_document, ParsedCapture};
use super::schema::Capture;
use crate::utils::error::{ErrorKind, StructuredError};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve `path` against the current working directory
pub fn resolve_path(path: &str) -> Result<PathBuf, StructuredError> {
    let cwd = std::env::current_dir().map_err(|e| {
        StructuredError::from_io(&e, "Cannot determine working directory", Path::new("."))
    })?;
    Ok(cwd.join(path))
}

/// Load a capture file
///
/// # Errors
/// * `WS_NOT_FOUND` - resolved path does not exist
/// * `WS_PERMISSION_DENIED` / `WS_IO_ERROR` - file exists but cannot be read
/// * `WS_INVALID_JSON` - contents are not JSON
/// * `WS_INVALID_CAPTURE` - JSON does not satisfy the capture schema
pub fn load_capture(path: &str) -> Result<Capture, StructuredError> {
    load_capture_document(path).map(|parsed| parsed.capture)
}

/// Load a capture file, keeping the JSON document as read
///
/// Same errors as [`load_capture`].
pub fn load_capture_document(path: &str) -> Result<ParsedCapture, StructuredError> {
    let full_path = resolve_path(path)?;
    debug!("Loading capture from: {}", full_path.display());

    let bytes = read_existing(&full_path)?;

    parse_capture_document(&bytes).map_err(|e| {
        StructuredError::new(e.kind(), e.to_string()).with_path(&full_path)
    })
}

fn read_existing(full_path: &Path) -> Result<Vec<u8>, StructuredError> {
    match full_path.try_exists() {
        Ok(true) => {}
        Ok(false) => return Err(not_found(full_path)),
        Err(e) => {
            return Err(StructuredError::from_io(
                &e,
                format!("Cannot read file: {}", full_path.display()),
                full_path,
            ))
        }
    }

    fs::read(full_path).map_err(|e| {
        // Removed between the existence check and the read
        if e.kind() == std::io::ErrorKind::NotFound {
            return not_found(full_path);
        }
        StructuredError::from_io(&e, format!("Cannot read file: {}", full_path.display()), full_path)
    })
}

fn not_found(full_path: &Path) -> StructuredError {
    StructuredError::new(
        ErrorKind::NotFound,
        format!("File not found: {}", full_path.display()),
    )
    .with_path(full_path)
    .with_hint("Check the file path and try again.")
}
