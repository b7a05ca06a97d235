//! Native file and folder choosers behind a small capability trait.

use std::path::PathBuf;

/// Result of a single-selection picker dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    /// The user confirmed a selection.
    Chosen(PathBuf),
    /// The dialog went away without a selection: cancel button, escape, or
    /// a platform failure that closed it. The chooser does not tell these
    /// apart, so neither does this type.
    Dismissed,
}

/// Single-selection dialog services used by the facade.
///
/// The live implementation is [`NativeDialogs`]. Tests substitute a
/// scripted implementation so picker flows run without a display server.
pub trait Dialogs {
    /// Present a modal folder chooser titled with `prompt`.
    fn pick_folder(&self, prompt: &str) -> Pick;

    /// Present a modal file chooser titled with `prompt`.
    fn pick_file(&self, prompt: &str) -> Pick;
}

/// Live dialogs backed by the operating system's choosers. Blocks the
/// calling thread until the user answers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_folder(&self, prompt: &str) -> Pick {
        match rfd::FileDialog::new().set_title(prompt).pick_folder() {
            Some(path) => Pick::Chosen(path),
            None => Pick::Dismissed,
        }
    }

    fn pick_file(&self, prompt: &str) -> Pick {
        match rfd::FileDialog::new().set_title(prompt).pick_file() {
            Some(path) => Pick::Chosen(path),
            None => Pick::Dismissed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysHome;

    impl Dialogs for AlwaysHome {
        fn pick_folder(&self, _prompt: &str) -> Pick {
            Pick::Chosen(PathBuf::from("/home"))
        }

        fn pick_file(&self, _prompt: &str) -> Pick {
            Pick::Dismissed
        }
    }

    #[test]
    fn trait_objects_are_usable() {
        let dialogs: &dyn Dialogs = &AlwaysHome;
        assert_eq!(
            dialogs.pick_folder("Choose"),
            Pick::Chosen(PathBuf::from("/home"))
        );
        assert_eq!(dialogs.pick_file("Choose"), Pick::Dismissed);
    }
}
