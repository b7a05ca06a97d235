//! Lookup and reading of bundled, read-only resources.

use std::fs;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;

use crate::outcome::OpError;

/// Read-only resource directory shipped alongside the executable.
///
/// Resources are addressed by base name plus extension, mirroring how the
/// files were laid out at packaging time. The bundle is never written to by
/// this crate.
#[derive(Debug, Clone)]
pub struct ResourceBundle {
    root: PathBuf,
}

impl ResourceBundle {
    /// Bundle rooted at an explicit directory. Used by hosts with a
    /// non-standard install layout, and directly in tests.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        ResourceBundle { root: root.into() }
    }

    /// Locate the bundle for the running executable.
    ///
    /// Prefers a `resources` directory next to the executable, then a
    /// `resources` directory under the per-user shared data location. When
    /// neither exists the exe-adjacent path is kept as the root anyway;
    /// lookups against it fail, which matches the absent-result contract
    /// of every caller.
    pub fn discover() -> Self {
        let beside = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("resources")));
        if let Some(beside) = &beside {
            if beside.is_dir() {
                return ResourceBundle {
                    root: beside.clone(),
                };
            }
        }
        if let Some(dirs) = ProjectDirs::from("", "", "filedesk") {
            let shared = dirs.data_dir().join("resources");
            if shared.is_dir() {
                return ResourceBundle { root: shared };
            }
        }
        ResourceBundle {
            root: beside.unwrap_or_else(|| PathBuf::from("resources")),
        }
    }

    /// Directory this bundle resolves against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name.ext` inside the bundle.
    pub fn locate(&self, name: &str, ext: &str) -> Result<PathBuf, OpError> {
        let candidate = self.root.join(format!("{name}.{ext}"));
        if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(OpError::ResourceMissing(format!("{name}.{ext}")))
        }
    }

    /// Read `name.ext` from the bundle as UTF-8 text.
    pub fn read_text(&self, name: &str, ext: &str) -> Result<String, OpError> {
        let path = self.locate(name, ext)?;
        Ok(fs::read_to_string(path)?)
    }
}
