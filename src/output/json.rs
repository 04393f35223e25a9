//! JSON file output writer.
//!
//! Writes serializable values (bundles) to pretty-printed JSON files.

use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a value to a pretty-printed JSON file
///
/// **Public** - main entry point for file output
///
/// # Arguments
/// * `value` - Data to write
/// * `output_path` - Path to output JSON file
///
/// # Returns
/// Number of bytes written
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error while creating directories or writing
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path is empty or names a directory
///
/// # Example
/// ```ignore
/// let bundle = assemble_bundle(&args)?;
/// write_json_pretty(&bundle, "bundle.json")?;
/// ```
pub fn write_json_pretty<T: Serialize>(
    value: &T,
    output_path: impl AsRef<Path>,
) -> Result<u64, OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON to: {}", output_path.display());

    // Validate path
    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    let size = calculate_file_size(output_path);
    info!("JSON written successfully ({} bytes)", size);

    Ok(size)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use serde_json::json;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_and_read_back() {
        let temp_file = NamedTempFile::new().unwrap();
        let value = json!({ "schemaVersion": "0.1", "captures": [] });

        let size = write_json_pretty(&value, temp_file.path()).unwrap();
        assert!(size > 0);

        let text = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(text.contains('\n'));
        let loaded: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }

    #[test]
    fn test_directory_target_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = write_json_pretty(&json!({}), temp_dir.path()).unwrap_err();

        let structured = err.into_structured(temp_dir.path());
        assert_eq!(structured.code, ErrorKind::IoError);
        assert_eq!(structured.exit_code(), 2);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/bundle.json");

        write_json_pretty(&json!({ "ok": true }), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_write_failures_classify_by_os_error() {
        let path = Path::new("/out/bundle.json");

        let denied = OutputError::WriteFailed(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied,
        ));
        assert_eq!(denied.into_structured(path).code, ErrorKind::PermissionDenied);

        let missing = OutputError::WriteFailed(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(missing.into_structured(path).code, ErrorKind::IoError);
    }
}
