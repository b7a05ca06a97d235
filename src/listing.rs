//! Immediate folder listings.

use std::fs;
use std::path::{Path, PathBuf};

use crate::outcome::OpError;

/// List the immediate children of `folder`.
///
/// Behaviour:
/// - Subfolders (and bundle-style directories) appear as single opaque
///   entries; nothing is walked recursively.
/// - Entries whose name starts with `.` are excluded.
/// - The result is sorted by path so repeated calls are comparable.
pub fn visible_children(folder: &Path) -> Result<Vec<PathBuf>, OpError> {
    let mut children = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        children.push(entry.path());
    }
    children.sort();
    Ok(children)
}
