// src/file_ops.rs
//! File-level helpers
//!
//! Extension-based file classification and deferred cleanup of the temp
//! files left behind by uploads and exports.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::consts::DEFAULT_TEMP_FILE_TIMEOUT;
use crate::enums::FileType;

/// Classify a file by extension (case-insensitive, leading dot optional)
pub fn parse_file_type(ext: Option<&str>) -> FileType {
    let Some(ext) = ext else {
        return FileType::Other;
    };
    match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
        "xls" | "xlsx" => FileType::Excel,
        "doc" | "docx" => FileType::Word,
        "pdf" => FileType::Pdf,
        "csv" => FileType::Csv,
        _ => FileType::Other,
    }
}

/// Classify a path by its extension
pub fn file_type_of<P: AsRef<Path>>(path: P) -> FileType {
    parse_file_type(path.as_ref().extension().and_then(|e| e.to_str()))
}

/// Delete `path` after `timeout` on a detached thread
///
/// Best effort: a file that is already gone or cannot be removed is
/// logged and otherwise ignored.
pub fn remove_temp_file<P: Into<PathBuf>>(path: P, timeout: Duration) {
    let path = path.into();
    thread::spawn(move || {
        thread::sleep(timeout);
        match std::fs::remove_file(&path) {
            Ok(()) => debug!(path = %path.display(), "removed temp file"),
            Err(err) => debug!(path = %path.display(), %err, "temp file cleanup skipped"),
        }
    });
}

/// [`remove_temp_file`] with the default one-minute delay
pub fn remove_temp_file_default<P: Into<PathBuf>>(path: P) {
    remove_temp_file(path, DEFAULT_TEMP_FILE_TIMEOUT);
}
