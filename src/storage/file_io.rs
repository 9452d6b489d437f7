//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. Every
//! write lands in a sibling temp file which is synced and then renamed over
//! the target, so readers never observe a partially written file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::TrackerError;

/// Read a file to a string, returning None if it doesn't exist
pub fn read_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<String>, TrackerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| TrackerError::Persistence(format!("Failed to read {}: {}", path.display(), e)))
}

/// Temp file path used while writing `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a file atomically (write to temp, then rename)
///
/// `write_contents` receives a buffered writer over the temp file. If it
/// fails, the temp file is removed and the target is left untouched.
pub fn write_atomic<P, F>(path: P, write_contents: F) -> Result<(), TrackerError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), TrackerError>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Persistence(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let result = (|| {
        let file = File::create(&temp_path)
            .map_err(|e| TrackerError::Persistence(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        write_contents(&mut writer)?;

        writer
            .flush()
            .map_err(|e| TrackerError::Persistence(format!("Failed to flush data: {}", e)))?;

        writer
            .get_ref()
            .sync_all()
            .map_err(|e| TrackerError::Persistence(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, path)
            .map_err(|e| TrackerError::Persistence(format!("Failed to rename temp file: {}", e)))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

/// Write JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| TrackerError::Persistence(format!("Failed to serialize data: {}", e)))
    })
}
