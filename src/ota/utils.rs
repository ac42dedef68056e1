//! File helpers shared by the store and the vocabulary bundle.

use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::Path;
use log::debug;
use tempfile::NamedTempFile;

use super::types::error::{OtaError, Result};

/// Opens a dictionary source, reporting a missing file as `OtaError::NotFound`.
pub fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => OtaError::NotFound {
            path: path.to_path_buf(),
        },
        _ => OtaError::Io(e),
    })
}

/// Replaces the file at `path` with `contents`.
///
/// The bytes go to a temporary file in the same directory which is then
/// renamed over the target, so a failed write leaves the old file intact.
pub fn commit_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| OtaError::Io(e.error))?;
    debug!("Committed {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Uppercases the first character of `text`.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
