//! One-shot snapshot reader for the engine log file.

use crate::domain::BridgeError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the complete ordered line sequence of `path` as it exists right now.
///
/// The file is opened for plain shared read, so a producer that still holds
/// the file open for appending neither blocks this read nor is blocked by it.
/// Lines appended after the read completes are never seen; this is a snapshot,
/// not a tail.
///
/// Bytes are decoded as UTF-8 with lossy replacement and split on line
/// boundaries with terminators stripped. A file ending in a newline yields no
/// trailing empty line; empty lines inside the file are preserved.
///
/// Any I/O failure (missing file, permission denied) is classified as
/// `BridgeError::InputUnavailable` and aborts the whole run before any entry
/// is forwarded.
pub fn read_all_lines(path: &Path) -> Result<Vec<String>, BridgeError> {
    let bytes = fs::read(path).map_err(|source| BridgeError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect();

    debug!(path = %path.display(), line_count = lines.len(), "read log snapshot");
    Ok(lines)
}
