//! Convenience facade over native file dialogs and everyday filesystem
//! chores.
//!
//! [`FileController`] wraps a handful of operations that otherwise take a
//! dozen lines each: picking a file or folder with a native chooser,
//! listing a folder's visible children, reading and copying bundled
//! resources, writing text, creating (or destructively replacing) a
//! folder, copying files, and converting POSIX paths to the legacy
//! colon-delimited notation.
//!
//! Each method keeps the signaling convention of the interface it wraps:
//! pickers and lookups return `Option`, the bundled-resource copy answers
//! with a bare `bool`, and the two writing operations return
//! `Option<OpError>` where `None` means success. Read the method docs
//! before inverting a result.

pub mod bundle;
pub mod controller;
pub mod copy;
pub mod dialogs;
pub mod folders;
pub mod hfs;
pub mod listing;
pub mod outcome;
pub mod write;

pub use crate::bundle::ResourceBundle;
pub use crate::controller::FileController;
pub use crate::dialogs::{Dialogs, NativeDialogs, Pick};
pub use crate::hfs::posix_to_hfs;
pub use crate::outcome::OpError;
