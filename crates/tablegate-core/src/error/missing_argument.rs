use super::Error;

/// Error when a write operation is called without a fragment it requires.
///
/// Raised before any statement reaches the database, so the caller can rely
/// on nothing having been modified.
#[derive(Debug)]
pub(super) struct MissingArgument {
    pub(super) what: Box<str>,
}

impl std::error::Error for MissingArgument {}

impl core::fmt::Display for MissingArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing argument: {}", self.what)
    }
}

impl Error {
    /// Creates a missing argument error describing what was not supplied.
    pub fn missing_argument(what: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingArgument(MissingArgument {
            what: what.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing argument error.
    pub fn is_missing_argument(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::MissingArgument(_)))
    }
}
