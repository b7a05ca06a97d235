use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the facade's filesystem and bundle helpers.
#[derive(Debug, Error)]
pub enum OpError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The destination already holds an entry with the source's name.
    #[error("destination already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The path ends without a usable file name.
    #[error("path has no file name: {}", .0.display())]
    MissingFileName(PathBuf),

    /// Lookup inside the resource bundle found nothing for `name.ext`.
    #[error("bundled resource not found: {0}")]
    ResourceMissing(String),
}

/// Internal tagged result shared by every facade operation.
///
/// Public methods collapse this to the convention of the interface they
/// reproduce (absent result, boolean, or error-or-`None`); a `Failed`
/// cause is logged before it is discarded so the reduction is observable.
#[derive(Debug)]
pub(crate) enum Outcome<T> {
    Done(T),
    Cancelled,
    Failed(OpError),
}

impl<T> From<Result<T, OpError>> for Outcome<T> {
    fn from(res: Result<T, OpError>) -> Self {
        match res {
            Ok(v) => Outcome::Done(v),
            Err(e) => Outcome::Failed(e),
        }
    }
}

impl<T> Outcome<T> {
    /// Collapse to the absent-result convention. Cancellation and failure
    /// are indistinguishable to the caller afterwards.
    pub(crate) fn swallowed(self, op: &'static str) -> Option<T> {
        match self {
            Outcome::Done(v) => Some(v),
            Outcome::Cancelled => {
                tracing::debug!(op, "dialog dismissed");
                None
            }
            Outcome::Failed(err) => {
                tracing::debug!(op, error = %err, "discarding failure");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn ok_result_becomes_done() {
        let outcome = Outcome::from(Ok::<_, OpError>(7));
        assert_eq!(outcome.swallowed("test"), Some(7));
    }

    #[test]
    fn err_result_is_swallowed_to_none() {
        let err = OpError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let outcome = Outcome::from(Err::<u8, _>(err));
        assert_eq!(outcome.swallowed("test"), None);
    }

    #[test]
    fn cancelled_is_swallowed_to_none() {
        let outcome: Outcome<u8> = Outcome::Cancelled;
        assert_eq!(outcome.swallowed("test"), None);
    }

    #[test]
    fn error_messages_name_the_path() {
        let err = OpError::AlreadyExists(Path::new("/tmp/x").to_path_buf());
        assert!(err.to_string().contains("/tmp/x"));
        let err = OpError::ResourceMissing("tpl.xml".to_string());
        assert!(err.to_string().contains("tpl.xml"));
    }
}
