use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;

/// Writes `content` to `path` unless the file already holds exactly that.
///
/// Returns `true` if the file was written.
///
/// # Errors
///
/// Returns `KerfcutError::Io` if reading (other than a missing file) or
/// writing fails.
pub fn update_file(path: impl AsRef<Path>, content: &str) -> Result<bool> {
    let path = path.as_ref();
    let old = match fs::read_to_string(path) {
        Ok(old) => Some(old),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    if old.as_deref() == Some(content) {
        tracing::debug!(path = %path.display(), "file unchanged, skipping write");
        return Ok(false);
    }

    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "file written");
    Ok(true)
}
