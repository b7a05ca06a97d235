//! Copies into a target folder, keeping the source's name.

use std::io;
use std::path::{Path, PathBuf};

use fs_extra::dir;
use fs_extra::file;

use crate::outcome::OpError;

/// Copy `source` (file or folder) into `folder` under its original name.
///
/// Refuses to replace an entry already present at the destination and
/// reports [`OpError::AlreadyExists`] instead of overwriting.
pub fn copy_into(source: &Path, folder: &Path) -> Result<PathBuf, OpError> {
    let name = source
        .file_name()
        .ok_or_else(|| OpError::MissingFileName(source.to_path_buf()))?;
    let dest = folder.join(name);
    if dest.symlink_metadata().is_ok() {
        return Err(OpError::AlreadyExists(dest));
    }

    if source.is_dir() {
        let mut options = dir::CopyOptions::new();
        options.overwrite = false;
        options.buffer_size = 64 * 1024;
        // Copies `source` itself into `folder`, producing `folder/name`.
        dir::copy(source, folder, &options).map_err(into_io)?;
    } else {
        let mut options = file::CopyOptions::new();
        options.overwrite = false;
        options.buffer_size = 64 * 1024;
        file::copy(source, &dest, &options).map_err(into_io)?;
    }
    Ok(dest)
}

// fs_extra has its own error type; callers only see `OpError`.
fn into_io(e: fs_extra::error::Error) -> OpError {
    OpError::Io(io::Error::other(e))
}
