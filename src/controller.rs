//! The public facade tying dialogs, bundle access, and file chores
//! together.

use std::path::{Path, PathBuf};

use crate::bundle::ResourceBundle;
use crate::copy;
use crate::dialogs::{Dialogs, NativeDialogs, Pick};
use crate::folders;
use crate::hfs;
use crate::listing;
use crate::outcome::{OpError, Outcome};
use crate::write;

/// Facade over native choosers and everyday file operations.
///
/// Every method is synchronous, blocking, and independent; nothing is
/// cached between calls and no operation retries. Three signaling
/// conventions are reproduced deliberately:
///
/// - pickers, listings, bundle lookups and folder creation collapse every
///   failure (a cancelled dialog included) into an absent result;
/// - [`populate_folder`](FileController::populate_folder) answers with a
///   bare `bool`;
/// - [`write_string`](FileController::write_string) and
///   [`copy_file_to_folder`](FileController::copy_file_to_folder) return
///   `None` on success and the structured cause on failure. Check for
///   `None`, not truthiness.
pub struct FileController<D: Dialogs = NativeDialogs> {
    dialogs: D,
    bundle: ResourceBundle,
}

impl FileController<NativeDialogs> {
    /// Facade with live native dialogs and the discovered resource bundle.
    pub fn new() -> Self {
        FileController {
            dialogs: NativeDialogs,
            bundle: ResourceBundle::discover(),
        }
    }
}

impl Default for FileController<NativeDialogs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dialogs> FileController<D> {
    /// Facade with explicitly injected dialog service and bundle. This is
    /// the substitution point for scripted dialogs in tests.
    pub fn with_parts(dialogs: D, bundle: ResourceBundle) -> Self {
        FileController { dialogs, bundle }
    }

    /// Let the user pick a single folder; `None` when the dialog is
    /// dismissed or fails (the two are indistinguishable here).
    pub fn select_folder(&self, prompt: &str) -> Option<PathBuf> {
        pick_outcome(self.dialogs.pick_folder(prompt)).swallowed("select_folder")
    }

    /// Let the user pick a single file; same contract as
    /// [`select_folder`](FileController::select_folder).
    pub fn select_file(&self, prompt: &str) -> Option<PathBuf> {
        pick_outcome(self.dialogs.pick_file(prompt)).swallowed("select_file")
    }

    /// Immediate visible children of `folder`; `None` when the folder
    /// cannot be read. See [`listing::visible_children`] for the rules.
    pub fn files_in_folder(&self, folder: &Path) -> Option<Vec<PathBuf>> {
        Outcome::from(listing::visible_children(folder)).swallowed("files_in_folder")
    }

    /// Text of the bundled resource `name.ext`; `None` when it is missing
    /// or unreadable.
    pub fn string_from_bundled_file(&self, name: &str, ext: &str) -> Option<String> {
        Outcome::from(self.bundle.read_text(name, ext)).swallowed("string_from_bundled_file")
    }

    /// Location of the bundled resource `name.ext`.
    pub fn bundled_file_path(&self, name: &str, ext: &str) -> Option<PathBuf> {
        Outcome::from(self.bundle.locate(name, ext)).swallowed("bundled_file_path")
    }

    /// Write `content` to `dest`. **`None` means the write succeeded**;
    /// `Some` carries the cause of the failure. `display_name` labels the
    /// failure log line only and never affects the path written to.
    pub fn write_string(&self, content: &str, dest: &Path, display_name: &str) -> Option<OpError> {
        match write::write_text(content, dest) {
            Ok(()) => None,
            Err(err) => {
                tracing::debug!(name = display_name, error = %err, "write failed");
                Some(err)
            }
        }
    }

    /// Create `parent/name`, deleting any existing entry of that name
    /// first (contents discarded, not merged). `None` when either the
    /// delete or the create step fails; a failure between the two steps
    /// can leave the old folder gone without a replacement.
    pub fn make_folder(&self, name: &str, parent: &Path) -> Option<PathBuf> {
        Outcome::from(folders::plan(name, parent).execute()).swallowed("make_folder")
    }

    /// Copy the bundled resource `name.ext` into `folder`. `true` only
    /// when both the lookup and the copy succeed.
    pub fn populate_folder(&self, folder: &Path, name: &str, ext: &str) -> bool {
        let copied = self
            .bundle
            .locate(name, ext)
            .and_then(|resource| copy::copy_into(&resource, folder));
        Outcome::from(copied).swallowed("populate_folder").is_some()
    }

    /// Copy an external `file` into `folder`, keeping its name. **`None`
    /// means the copy succeeded**, the opposite polarity of
    /// [`populate_folder`](FileController::populate_folder).
    pub fn copy_file_to_folder(&self, file: &Path, folder: &Path) -> Option<OpError> {
        match copy::copy_into(file, folder) {
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(error = %err, "copy failed");
                Some(err)
            }
        }
    }

    /// See [`hfs::posix_to_hfs`].
    pub fn posix_to_hfs(&self, posix: &str, is_directory: bool) -> String {
        hfs::posix_to_hfs(posix, is_directory)
    }
}

fn pick_outcome(pick: Pick) -> Outcome<PathBuf> {
    match pick {
        Pick::Chosen(path) => Outcome::Done(path),
        Pick::Dismissed => Outcome::Cancelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Scripted dialogs: every call answers with the same canned pick.
    struct Scripted {
        folder: Pick,
        file: Pick,
    }

    impl Dialogs for Scripted {
        fn pick_folder(&self, _prompt: &str) -> Pick {
            self.folder.clone()
        }

        fn pick_file(&self, _prompt: &str) -> Pick {
            self.file.clone()
        }
    }

    fn controller_with(folder: Pick, file: Pick) -> FileController<Scripted> {
        FileController::with_parts(
            Scripted { folder, file },
            ResourceBundle::rooted("unused-bundle-root"),
        )
    }

    #[test]
    fn chosen_locations_are_forwarded_unmodified() {
        let picked = PathBuf::from("/data/projects");
        let fc = controller_with(
            Pick::Chosen(picked.clone()),
            Pick::Chosen(PathBuf::from("/data/report.txt")),
        );
        assert_eq!(fc.select_folder("Choose a folder"), Some(picked));
        assert_eq!(
            fc.select_file("Choose a file"),
            Some(PathBuf::from("/data/report.txt"))
        );
    }

    #[test]
    fn dismissed_dialogs_yield_none() {
        let fc = controller_with(Pick::Dismissed, Pick::Dismissed);
        assert_eq!(fc.select_folder("Choose"), None);
        assert_eq!(fc.select_file("Choose"), None);
    }

    #[test]
    fn write_string_returns_none_on_success() {
        let td = tempdir().expect("tempdir");
        let fc = controller_with(Pick::Dismissed, Pick::Dismissed);
        let dest = td.path().join("out.txt");
        assert!(fc.write_string("payload", &dest, "out").is_none());
        assert_eq!(fs::read_to_string(&dest).expect("read"), "payload");
    }

    #[test]
    fn write_string_surfaces_the_cause_on_failure() {
        let td = tempdir().expect("tempdir");
        let fc = controller_with(Pick::Dismissed, Pick::Dismissed);
        let dest = td.path().join("missing-parent").join("out.txt");
        let err = fc.write_string("payload", &dest, "out").expect("error");
        assert!(matches!(err, OpError::Io(_)));
    }

    #[test]
    fn populate_folder_is_false_without_a_bundle() {
        let td = tempdir().expect("tempdir");
        let fc = controller_with(Pick::Dismissed, Pick::Dismissed);
        assert!(!fc.populate_folder(td.path(), "template", "xml"));
    }
}
