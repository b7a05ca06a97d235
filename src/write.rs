//! Text writes with the platform's atomic-save behaviour.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::outcome::OpError;

/// Write `content` to `dest`, replacing any previous contents.
///
/// The text goes to a temporary file in the destination directory first and
/// is renamed into place, so readers never observe a partial write. Missing
/// parent directories are not created; the caller gets the underlying
/// `NotFound` failure instead.
pub fn write_text(content: &str, dest: &Path) -> Result<(), OpError> {
    let tmp = sibling_temp_path(dest)?;
    if let Err(e) = fs::write(&tmp, content) {
        let _ = fs::remove_file(&tmp);
        return Err(OpError::Io(e));
    }
    match fs::rename(&tmp, dest) {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(OpError::Io(e))
        }
    }
}

// Temp name beside the destination; pid + timestamp keeps concurrent
// writers in separate files.
fn sibling_temp_path(dest: &Path) -> Result<PathBuf, OpError> {
    let name = dest
        .file_name()
        .ok_or_else(|| OpError::MissingFileName(dest.to_path_buf()))?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let pid = std::process::id();
    let mut tmp = dest.to_path_buf();
    tmp.set_file_name(format!(
        ".{}.{:x}-{:x}.tmp",
        name.to_string_lossy(),
        pid,
        nanos
    ));
    Ok(tmp)
}
