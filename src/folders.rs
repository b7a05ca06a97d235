//! Folder creation with destructive-replace semantics.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::outcome::OpError;

/// Planned creation of `parent/name`, noting whether an entry already
/// occupies the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacePlan {
    target: PathBuf,
    existing: bool,
}

/// Compute the target path for `name` under `parent` and record whether an
/// entry of any kind already occupies it.
pub fn plan(name: &str, parent: &Path) -> ReplacePlan {
    let target = parent.join(name);
    let existing = target.symlink_metadata().is_ok();
    ReplacePlan { target, existing }
}

impl ReplacePlan {
    /// Target path the plan will create.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Whether something occupied the target at planning time.
    pub fn replaces_existing(&self) -> bool {
        self.existing
    }

    /// Delete whatever occupies the target, then create the empty folder.
    ///
    /// The two steps are separate filesystem calls: a failure after the
    /// delete leaves the target absent without a replacement, and a
    /// concurrent writer can slip in between them. Callers that need
    /// stronger guarantees must serialize access to the parent themselves.
    pub fn execute(self) -> Result<PathBuf, OpError> {
        if self.existing {
            tracing::debug!(path = %self.target.display(), "replacing existing entry");
            remove_entry(&self.target)?;
        }
        fs::create_dir(&self.target)?;
        Ok(self.target)
    }
}

/// Remove `path` whether it is a file, a folder tree, or a dangling link.
fn remove_entry(path: &Path) -> Result<(), OpError> {
    let meta = match path.symlink_metadata() {
        Ok(m) => m,
        // Raced away since planning; nothing left to delete.
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(OpError::Io(e)),
    };
    if meta.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}
